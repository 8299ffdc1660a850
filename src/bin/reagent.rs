//! `reagent` — cross-repository structural clone detection CLI.

use clap::Parser;

mod cli;

use cli::args::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Analyze(args) => cli::analyze_command(args).await,
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        let exit_code = err
            .downcast_ref::<reagent::core::errors::ReagentError>()
            .map(|e| e.exit_code())
            .unwrap_or(1);
        std::process::exit(exit_code);
    }
}
