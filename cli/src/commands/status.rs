use onhands_common::config::Config;

use crate::commands;
use crate::terminal::{print, spinner};

pub async fn status(cfg: &Config, quiet: bool) -> anyhow::Result<()> {
    let engine = commands::open_sheet(cfg).await?;
    let collection = spinner::while_running("Reading the spreadsheet...", engine.read()).await?;

    print::header("on-hands by ball", quiet);
    print::status_table(&collection.totals_by_ball(), &collection.total());
    Ok(())
}
