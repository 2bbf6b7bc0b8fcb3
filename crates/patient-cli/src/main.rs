//! Patient records command-line binary.

use clap::Parser;
use patient_cli::{run, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let config = Config::parse();

    // Initialize tracing; stdout is reserved for the listing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .init();

    if let Err(e) = run(&config, std::io::stdout().lock()) {
        tracing::error!("Could not replay instructions: {}", e);
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    }
}
