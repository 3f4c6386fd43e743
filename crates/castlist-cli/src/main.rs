//! castlist CLI
//!
//! Command-line interface for the casting tracker

use castlist_core::logging_facility::{init, Profile};
use castlist_store::db::DEFAULT_DB_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "castlist")]
#[command(about = "castlist - Theater casting tracker", long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Log operations to stderr in human-readable form
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log operations to stderr as JSON
    #[arg(long, global = true, conflicts_with = "verbose")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Cast Hamlet from two sample auditions and print the result
    Demo,
    /// Role operations
    Role(commands::role::RoleArgs),
    /// Audition operations
    Audition(commands::audition::AuditionArgs),
    /// Print a role's actors, locations, lead and understudy
    Show(commands::show::ShowArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.log_json {
        init(Profile::Production);
    } else if cli.verbose {
        init(Profile::Development);
    }

    let result = commands::open_store(&cli.db).and_then(|mut conn| match cli.command {
        Commands::Demo => commands::demo::execute(&mut conn),
        Commands::Role(args) => commands::role::execute(args, &mut conn),
        Commands::Audition(args) => commands::audition::execute(args, &mut conn),
        Commands::Show(args) => commands::show::execute(args, &mut conn),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
