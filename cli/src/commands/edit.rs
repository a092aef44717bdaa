use anyhow::Context;
use onhands_common::config::Config;
use onhands_common::input::lines::collection_from_lines;
use tracing::info;

use crate::commands::{self, BatchArgs};
use crate::terminal::spinner;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Add,
    Remove,
}

impl Change {
    fn verb(self) -> &'static str {
        match self {
            Change::Add => "Adding",
            Change::Remove => "Removing",
        }
    }
}

/// `oh add` and `oh rm`.
///
/// The whole input is parsed before the sheet is opened, so a bad line
/// never leaves a half-applied batch behind.
pub async fn edit(change: Change, args: &BatchArgs, cfg: &Config) -> anyhow::Result<()> {
    let game = match args.game {
        Some(game) => format!("({game})"),
        None => String::from("(no game profile specified)"),
    };
    info!("{} from {} {}", change.verb(), args.input.describe(), game);

    let lines = args.input.read_lines()?;
    let delta = collection_from_lines(&lines, args.game)
        .context("invalid input, nothing was changed")?;

    if delta.is_empty() {
        info!("No entries given, leaving the sheet alone.");
        return Ok(());
    }

    let engine = commands::open_sheet(cfg).await?;
    let summary = spinner::while_running("Syncing with the spreadsheet...", async {
        match change {
            Change::Add => engine.add(&delta).await,
            Change::Remove => engine.remove(&delta).await,
        }
    })
    .await?;

    info!(
        "{} entries now on the sheet ({} rows before, {} after).",
        summary.entries, summary.rows_before, summary.rows_after
    );
    Ok(())
}
