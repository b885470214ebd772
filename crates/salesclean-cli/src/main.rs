//! salesclean CLI - clean raw sales exports.

mod cli;
mod commands;
mod display;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            load,
            preview,
            json,
        } => {
            logging::init(cli.verbose, json);
            commands::run::run(input, output, load, preview, json)
        }

        Commands::Describe { file, load, json } => {
            logging::init(cli.verbose, json);
            commands::describe::run(file, load, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
