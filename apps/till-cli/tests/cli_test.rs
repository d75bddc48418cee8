use assert_cmd::Command;
use predicates::prelude::*;

fn till() -> Command {
    let mut cmd = Command::cargo_bin("till").unwrap();
    cmd.env_remove("TILL_DEFAULT_PRICE")
        .env_remove("TILL_CURRENCY_SYMBOL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_compute_breakdown() {
    till()
        .args(["compute", "--price", "47.50", "--tender", "fifty=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Paid: $50.00"))
        .stdout(predicate::str::contains("Change Due:\n  1 x $2\n  1 x 50c\n"));
}

#[test]
fn test_compute_exact_with_default_price() {
    till()
        .args(["compute", "--tender", "hundred"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct amount given"));
}

#[test]
fn test_compute_insufficient() {
    till()
        .args(["compute", "--price", "100", "--tender", "fifty=1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The amount given is less than the price",
        ));
}

#[test]
fn test_unknown_denomination_is_warned_not_fatal() {
    till()
        .args([
            "compute", "--price", "19.95", "--tender", "twenty=1", "--tender", "doubloon=3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1 x 5c\n"))
        .stderr(predicate::str::contains("unknown denomination"));
}

#[test]
fn test_unknown_denomination_warned_once_per_compute() {
    let output = till()
        .args([
            "compute", "--price", "19.95", "--tender", "twenty=1", "--tender", "doubloon=3",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("unknown denomination").count(), 1);
}

#[test]
fn test_negative_price_rejected() {
    till()
        .args(["compute", "--price=-5", "--tender", "ten=1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("price must not be negative"));
}

#[test]
fn test_json_output() {
    till()
        .args(["compute", "--price", "33.33", "--tender", "fifty=1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"breakdown\""))
        .stdout(predicate::str::contains("\"remainder\": 2"));
}

#[test]
fn test_session_from_stdin() {
    till()
        .arg("session")
        .write_stdin("price 19.95\n+ twenty\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Purchase Amount: $19.95\nTotal Paid: $20.00\nChange Due:\n  1 x 5c\n",
        ));
}

#[test]
fn test_env_config() {
    till()
        .env("TILL_CURRENCY_SYMBOL", "A$")
        .env("TILL_DEFAULT_PRICE", "2.50")
        .args(["compute", "--tender", "1dollar=3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Purchase Amount: A$2.50"))
        .stdout(predicate::str::contains("  1 x 50c\n"));
}

#[test]
fn test_denominations_listing() {
    till()
        .arg("denominations")
        .assert()
        .success()
        .stdout(predicate::str::contains("50cents"))
        .stdout(predicate::str::contains("$100.00"));
}
