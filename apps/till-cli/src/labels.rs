//! Display labels for internal denomination names.
//!
//! Kept out of the engine: `till-core` only knows names like `"2dollars"`,
//! the front end decides they print as `$2`.

/// Maps an internal denomination name to its display label.
///
/// Unknown names are shown as-is.
///
/// ## Example
/// ```rust
/// use till_cli::labels::display_label;
///
/// assert_eq!(display_label("2dollars"), "$2");
/// assert_eq!(display_label("50cents"), "50c");
/// assert_eq!(display_label("doubloon"), "doubloon");
/// ```
pub fn display_label(name: &str) -> &str {
    match name {
        "hundred" => "$100",
        "fifty" => "$50",
        "twenty" => "$20",
        "ten" => "$10",
        "five" => "$5",
        "2dollars" => "$2",
        "1dollar" => "$1",
        "50cents" => "50c",
        "20cents" => "20c",
        "10cents" => "10c",
        "5cents" => "5c",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use till_core::STANDARD_DENOMINATIONS;

    #[test]
    fn test_every_standard_denomination_has_a_label() {
        for denomination in STANDARD_DENOMINATIONS {
            assert_ne!(display_label(denomination.name), denomination.name);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(display_label("hundred"), "$100");
        assert_eq!(display_label("1dollar"), "$1");
        assert_eq!(display_label("5cents"), "5c");
    }
}
