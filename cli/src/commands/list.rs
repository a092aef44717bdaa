use onhands_common::config::Config;
use tracing::info;

use crate::commands;
use crate::terminal::{print, spinner};

pub async fn list(cfg: &Config, quiet: bool) -> anyhow::Result<()> {
    let engine = commands::open_sheet(cfg).await?;
    let collection = spinner::while_running("Reading the spreadsheet...", engine.read())
        .await?
        .prune();

    if collection.is_empty() {
        info!("The sheet has no on-hands.");
        return Ok(());
    }

    print::header("on-hands", quiet);
    print::listing(&collection);
    if !quiet {
        print::fat_separator();
    }
    Ok(())
}
