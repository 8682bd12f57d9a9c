//! rostercodec library root.
//! Exposes the roster codecs, file storage, CLI parser and the high-level
//! run() function.

pub mod cli;
pub mod codec;
pub mod config;
pub mod errors;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use codec::Strictness;
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Normalize { .. } => cli::commands::normalize::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // command-line overrides win over the config file
    if let Some(file) = &cli.file {
        cfg.roster_file = utils::path::expand_tilde(file)
            .to_string_lossy()
            .to_string();
    }
    if cli.lenient {
        cfg.strictness = Strictness::Lenient;
    }

    dispatch(&cli, &cfg)
}
