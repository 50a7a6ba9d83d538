//! # Pokedex CLI Module
//!
//! This module implements the CLI interface for the Pokedex client. The CLI
//! is a presentation consumer: it connects a [`Pokedex`] handle, issues
//! commands against it and prints the resulting state.
//!
//! ## Available Commands
//!
//! - `status` - Show source, state and catalog size (default)
//! - `list` - List the visible entities, optionally filtered
//! - `show` - Show one entity and its evolution chain

mod commands;

use crate::config::ClientConfig;
use crate::handle::Pokedex;
use crate::remote::HttpSource;
use crate::repository::{FixtureRepository, NetworkRepository, Repository};
use clap::{Parser, Subcommand};
use pokedex_core::PokedexError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Pokedex - catalog client
///
/// Fetches the creature catalog, searches it and resolves evolution chains.
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog endpoint (overrides config file and POKEDEX_URL)
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Use the built-in fixture catalog instead of the network
    #[arg(long, global = true)]
    pub fixture: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show source, state and catalog size
    Status,

    /// List entities
    List {
        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one entity with its evolution chain
    Show {
        /// Entity ID
        id: i64,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), PokedexError> {
    let command = cli.command.unwrap_or(Commands::Status);

    if cli.fixture {
        let pokedex = Pokedex::connect(FixtureRepository::default()).await;
        return dispatch(&pokedex, "built-in fixture", command, cli.json_mode);
    }

    let config =
        ClientConfig::load(cli.config.as_deref())?.with_overrides(cli.url.as_deref(), None)?;
    let source = HttpSource::new(&config)?;
    tracing::info!(endpoint = %source.endpoint(), "Fetching catalog");

    let pokedex = Pokedex::connect(NetworkRepository::new(source)).await;
    dispatch(&pokedex, &config.endpoint, command, cli.json_mode)
}

fn dispatch<R: Repository>(
    pokedex: &Pokedex<R>,
    origin: &str,
    command: Commands,
    json_mode: bool,
) -> Result<(), PokedexError> {
    match command {
        Commands::Status => cmd_status(pokedex, origin, json_mode),
        Commands::List { search } => cmd_list(pokedex, origin, search, json_mode),
        Commands::Show { id } => cmd_show(pokedex, origin, id, json_mode),
    }
}
