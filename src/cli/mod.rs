pub mod config;
#[cfg(feature = "pdf")]
pub mod export;
pub mod summary;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kmu-report",
    version,
    about = "Annual KPI report for small businesses from a balance sheet / P&L workbook."
)]
pub struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the KPI summary of a workbook.
    Summary {
        /// Workbook with `balance_sheet` and `profit_loss` sheets
        file: String,
        /// Organization name shown in the header
        #[arg(long)]
        org: Option<String>,
        /// Reporting period label, e.g. 'FY 2024'
        #[arg(long)]
        period: Option<String>,
        /// Also list the line items behind each ratio
        #[arg(long)]
        details: bool,
        /// Print the KPI record as JSON
        #[arg(long, conflicts_with = "details")]
        json: bool,
    },
    /// Render the KPI report to PDF.
    #[cfg(feature = "pdf")]
    Export {
        /// Workbook with `balance_sheet` and `profit_loss` sheets
        file: String,
        #[arg(long)]
        org: Option<String>,
        #[arg(long)]
        period: Option<String>,
        /// Output file path (default: <export_dir>/report.pdf)
        #[arg(long)]
        output: Option<String>,
    },
    /// Show or change the saved defaults.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the current settings.
    Show,
    /// Update one or more settings.
    Set {
        /// Default organization name
        #[arg(long)]
        org: Option<String>,
        /// Default reporting period label
        #[arg(long)]
        period: Option<String>,
        /// Directory for exported PDFs
        #[arg(long = "export-dir")]
        export_dir: Option<String>,
    },
}
