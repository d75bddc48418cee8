//! # till
//!
//! ```text
//! till compute --price 47.50 --tender fifty=1
//! till compute --tender hundred --json
//! till session < script.txt
//! till denominations
//! ```

use clap::{Args, Parser, Subcommand};
use miette::Result;
use std::io;

use till_cli::commands;
use till_cli::config::CliConfig;
use till_cli::tender::parse_tender_arg;
use till_core::{ChangeEngine, Money, Tender};

#[derive(Parser)]
#[command(author, version, about = "Works out change in notes and coins", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute change for one purchase
    Compute(ComputeArgs),

    /// Interactive counters read from stdin (price, + name, - name, set, clear, show, quit)
    Session,

    /// List the denominations the till knows about
    Denominations,
}

#[derive(Args)]
struct ComputeArgs {
    /// Purchase amount, e.g. 47.50 (defaults to TILL_DEFAULT_PRICE or 100.00)
    #[arg(long)]
    price: Option<Money>,

    /// Tendered units as name=count, repeatable (e.g. --tender fifty=1)
    #[arg(long = "tender", value_parser = parse_tender_arg)]
    tenders: Vec<Tender>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    till_cli::init_tracing();

    let cli = Cli::parse();
    let config = CliConfig::from_env()?;
    let engine = ChangeEngine::standard();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Compute(args) => {
            let price = args.price.unwrap_or(config.default_price);
            commands::compute(&config, engine, price, &args.tenders, args.json, &mut out)?;
        }
        Command::Session => {
            let stdin = io::stdin();
            commands::session(&config, engine, stdin.lock(), &mut out)?;
        }
        Command::Denominations => commands::denominations(&config, engine, &mut out)?,
    }

    Ok(())
}
