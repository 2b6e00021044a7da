//! Design pattern demonstrations.
//!
//! With no arguments, runs the strategy, chain of responsibility, and iterator
//! demonstrations on fixed sample data and prints the results.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use patterns::demo::{self, Section};
use patterns::exit_codes;
use patterns::logging;
use patterns::render::{Format, write_report};

const ALL_SECTIONS: &[Section] = &Section::ALL;

#[derive(Parser)]
#[command(
    name = "patterns",
    version,
    about = "Strategy, chain of responsibility, and iterator demonstrations"
)]
struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Sort the sample integers with bubble sort.
    Sort,
    /// Send the sample requests through operator → manager → director.
    Chain,
    /// Walk the sample collection with a fresh cursor.
    Iterate,
}

impl Command {
    fn sections(&self) -> &'static [Section] {
        match self {
            Command::Sort => &[Section::Sort],
            Command::Chain => &[Section::Chain],
            Command::Iterate => &[Section::Iterate],
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let sections = cli.command.as_ref().map_or(ALL_SECTIONS, Command::sections);
    let report = demo::run(sections)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report, cli.format)?;
    out.flush().context("flush stdout")?;
    Ok(())
}
