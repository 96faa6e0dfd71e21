//! Scour CLI - data cleaning strategy benchmark.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            file,
            target,
            plan,
            json,
        } => commands::run::run(file, target, plan.to_plan(), json, cli.verbose),

        Commands::Corrupt {
            file,
            output,
            target,
            plan,
        } => commands::corrupt::run(file, output, target, plan.to_plan(), cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
