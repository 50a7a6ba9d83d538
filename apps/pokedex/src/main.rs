//! # Pokedex - catalog client
//!
//! The main binary for the Pokedex client.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    apps/pokedex (THE BINARY)                 │
//! │                                                              │
//! │  ┌─────────────┐    ┌──────────────┐    ┌────────────────┐  │
//! │  │    CLI      │───►│   Pokedex    │◄───│   Repository   │  │
//! │  │   (clap)    │    │   (handle)   │    │ (HTTP/fixture) │  │
//! │  └─────────────┘    └──────┬───────┘    └────────────────┘  │
//! │                            ▼                                 │
//! │                    ┌───────────────┐                         │
//! │                    │ pokedex-core  │                         │
//! │                    │  (THE LOGIC)  │                         │
//! │                    └───────────────┘                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! pokedex status
//! pokedex list --search saur
//! pokedex show 2
//! pokedex --fixture --json-mode list
//! ```

use clap::Parser;
use pokedex::cli;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the log line format (`text` or `json`).
const LOG_FORMAT_ENV: &str = "POKEDEX_LOG_FORMAT";

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.quiet);

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

/// Route logs to stderr so stdout only ever carries command output.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` lowers the client's own
/// targets from `info` to `warn`.
fn init_logging(quiet: bool) {
    let level = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pokedex={level},pokedex_core={level}")));

    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|format| format == "json");
    let (json_layer, text_layer) = if json {
        let layer = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr);
        (Some(layer), None)
    } else {
        let layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn print_banner() {
    println!("Pokedex v{} - catalog client", env!("CARGO_PKG_VERSION"));
    println!();
}
