mod commands;
mod terminal;

use std::path::Path;

use anyhow::Context;
use commands::edit::Change;
use commands::{CommandLine, Commands, edit, list, reformat, search, status};
use onhands_common::config::Config;

use crate::terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let config_path = commands.config.as_deref();
    let quiet = commands.quiet;

    match &commands.command {
        Commands::Add(args) => edit::edit(Change::Add, args, &load_config(config_path)?).await,
        Commands::Rm(args) => edit::edit(Change::Remove, args, &load_config(config_path)?).await,
        Commands::Search(args) => search::search(args, &load_config(config_path)?, quiet).await,
        Commands::Status => status::status(&load_config(config_path)?, quiet).await,
        Commands::List => list::list(&load_config(config_path)?, quiet).await,
        Commands::Reformat(args) => reformat::reformat(args),
    }
}

/// Only commands that reach the sheet need a configuration.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    Config::load(path).context("failed to load configuration")
}
