pub mod edit;
pub mod list;
pub mod reformat;
pub mod search;
pub mod status;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use onhands_common::config::Config;
use onhands_common::inventory::GameProfile;
use onhands_core::sheets::GoogleSheet;
use onhands_core::sync::SyncEngine;

#[derive(Parser)]
#[command(name = "oh")]
#[command(about = "Manage on-hand Pokémon tracked in a shared spreadsheet.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print warnings, errors and results
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a list of on-hands to the sheet
    Add(BatchArgs),
    /// Remove a list of on-hands from the sheet
    #[command(alias = "remove")]
    Rm(BatchArgs),
    /// Look up the quantities of specific on-hands
    Search(InputArgs),
    /// Report quantities in each game, split by ball
    Status,
    /// List every on-hand on the sheet
    List,
    /// Rewrite shortcode notes into input lines, without touching the sheet
    #[command(alias = "tidy")]
    Reformat(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// File to read from. If not given, read from stdin
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct BatchArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Game every line belongs to. If not given, each line must start with one
    #[arg(short, long, value_name = "GAME")]
    pub game: Option<GameProfile>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl InputArgs {
    /// "file <path>" or "stdin", for progress messages.
    pub fn describe(&self) -> String {
        match &self.file {
            Some(path) => format!("file {}", path.display()),
            None => String::from("stdin"),
        }
    }

    pub fn read_lines(&self) -> anyhow::Result<Vec<String>> {
        read_lines(self.file.as_deref())
    }
}

fn read_lines(file: Option<&Path>) -> anyhow::Result<Vec<String>> {
    match file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(text.lines().map(str::to_owned).collect())
        }
        None => io::stdin()
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .context("failed to read stdin"),
    }
}

pub async fn open_sheet(cfg: &Config) -> anyhow::Result<SyncEngine<GoogleSheet>> {
    let sheet = GoogleSheet::connect(cfg).await.with_context(|| {
        format!(
            "could not open tab '{}' of spreadsheet {}",
            cfg.tab_name, cfg.spreadsheet_id
        )
    })?;
    Ok(SyncEngine::new(sheet))
}
