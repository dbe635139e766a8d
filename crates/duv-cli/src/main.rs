//! DUV CLI
//!
//! Command-line interface for the DUV declaration service

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "duv")]
#[command(about = "DUV - Maritime travel declarations service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load the seed and serve the HTTP API until interrupted
    Serve(commands::serve::ServeArgs),
    /// Seed file operations
    Seed(commands::seed::SeedArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args),
        Commands::Seed(args) => commands::seed::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
