// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (stderr, filtered by RUST_LOG)
// 2. Parse flags and CI environment variables into one Config
// 3. Run the audit
// 4. Exit with proper code (0 = no broken links, 1 = broken links or error)
// =============================================================================

use clap::Parser;
use markdown_link_validator::cli::Cli;
use markdown_link_validator::{run, Config, EXIT_BROKEN};
use std::io::IsTerminal;

// The #[tokio::main] attribute transforms our async main into a real main function
#[tokio::main]
async fn main() {
    init_tracing();

    let config = Config::from_cli(Cli::parse());
    tracing::debug!(?config, "resolved configuration");

    let exit_code = match run(&config).await {
        Ok(code) => code,
        Err(e) => {
            // Document errors already read "Error processing file ..."
            if e.path().is_some() {
                eprintln!("{}", e);
            } else {
                eprintln!("Error: {}", e);
            }
            EXIT_BROKEN
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so stdout only carries the report
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("markdown_link_validator=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
