//! Avia Calc - flight log fuel balance calculator
//!
//! A CLI tool that computes derived fuel-consumption figures for a flight
//! log from refueling quantities, densities, and flight times.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
