//! viewtmpl CLI
//!
//! Command-line host for comparing view templates from a document snapshot

use clap::{Parser, Subcommand, ValueEnum};
use viewtmpl_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "viewtmpl")]
#[command(about = "viewtmpl - Compare view templates and report differences", long_about = None)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogProfile::Development)]
    log_profile: LogProfile,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Development,
    Production,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the templates of a snapshot
    List(commands::list::ListArgs),
    /// Compare two templates and save a report
    Compare(commands::compare::CompareArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_profile {
        LogProfile::Development => Profile::Development,
        LogProfile::Production => Profile::Production,
    });

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(args),
        Commands::Compare(args) => commands::compare::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
