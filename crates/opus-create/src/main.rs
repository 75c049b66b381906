//! create-opus-ui-app - scaffold an Opus UI application
//!
//! This is the main entry point for the command-line interface. Every failure
//! is returned up to `main`, which prints it and exits with status 1.

mod cli;
mod commands;
mod output;
mod prompt;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

#[tokio::main]
async fn main() {
    // Parse CLI args
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = commands::create::run(cli).await {
        output::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Prompts and progress lines go through `output`; logs stay out of the way by default
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
