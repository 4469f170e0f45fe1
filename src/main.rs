mod cli;
mod error;
mod fmt;
mod kpi;
mod logging;
mod models;
mod normalize;
#[cfg(feature = "pdf")]
mod pdf;
mod report;
mod settings;
mod workbook;

use clap::Parser;

use cli::{Cli, Commands, ConfigCommands};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Summary {
            file,
            org,
            period,
            details,
            json,
        } => cli::summary::run(&file, org, period, details, json),
        #[cfg(feature = "pdf")]
        Commands::Export {
            file,
            org,
            period,
            output,
        } => cli::export::run(&file, org, period, output).map(|_| ()),
        Commands::Config { command } => match command {
            ConfigCommands::Show => cli::config::show(),
            ConfigCommands::Set {
                org,
                period,
                export_dir,
            } => cli::config::set(org, period, export_dir),
        },
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        if e.is_input_read() {
            eprintln!("Read error: {e}");
        } else {
            eprintln!("Error: {e}");
        }
        std::process::exit(1);
    }
}
