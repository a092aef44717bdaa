use onhands_common::config::Config;
use onhands_common::input::lines::identities_from_lines;
use onhands_common::inventory::Identity;
use tracing::info;

use crate::commands::{self, InputArgs};
use crate::terminal::{print, spinner};

pub async fn search(args: &InputArgs, cfg: &Config, quiet: bool) -> anyhow::Result<()> {
    info!("Searching for entries from {}", args.describe());

    let lines = args.read_lines()?;
    let wanted: Vec<Identity> = identities_from_lines(&lines)?;
    if wanted.is_empty() {
        return Ok(());
    }

    let engine = commands::open_sheet(cfg).await?;
    let collection = spinner::while_running("Reading the spreadsheet...", engine.read()).await?;

    print::header("search results", quiet);
    let names: Vec<String> = wanted.iter().map(Identity::to_string).collect();
    let width = print::key_width(names.iter().map(String::as_str));

    for (name, identity) in names.iter().zip(&wanted) {
        match collection.lookup(identity) {
            Ok(vector) => print::aligned_line(name, vector, width),
            Err(_) => print::not_found(name, width),
        }
    }
    Ok(())
}
