use onhands_common::input::tidy::reformat_lines;

use crate::commands::InputArgs;
use crate::terminal::print;

/// Local only: prints shortcode notes as input lines for `oh add -g`.
pub fn reformat(args: &InputArgs) -> anyhow::Result<()> {
    let lines = args.read_lines()?;
    for line in reformat_lines(&lines)? {
        print::out(&line);
    }
    Ok(())
}
