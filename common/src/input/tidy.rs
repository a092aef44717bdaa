//! # Reformat Helper
//!
//! Trade posts list on-hands as free text tagged with ball emoji shortcodes,
//! e.g. `:moonball: :loveball: Clefairy`. [`reformat_line`] turns one such line
//! into one untagged line per ball tag (`Moon clefairy`, `Love clefairy`),
//! ready to be fed to `add --game`.

use crate::error::ParseError;
use crate::inventory::Ball;

/// Reformats a single line. Lines with no ball tag produce nothing.
pub fn reformat_line(line: &str) -> Result<Vec<String>, ParseError> {
    let (codes, text) = split_shortcodes(line);
    let balls: Vec<Ball> = codes.iter().filter_map(|code| ball_from_shortcode(code)).collect();
    if balls.is_empty() {
        return Ok(Vec::new());
    }

    let species = species_token(&text);
    if species.is_empty() {
        return Err(ParseError::MalformedLine(line.to_string()));
    }

    Ok(balls
        .into_iter()
        .map(|ball| format!("{} {}", ball.name(), species))
        .collect())
}

/// Reformats every line of a batch, in order.
pub fn reformat_lines<I, S>(lines: I) -> Result<Vec<String>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = Vec::new();
    for line in lines {
        output.extend(reformat_line(line.as_ref())?);
    }
    Ok(output)
}

/// Pulls `:shortcode:` tokens out of a line, returning them with the text
/// that is left.
fn split_shortcodes(line: &str) -> (Vec<&str>, String) {
    let mut codes = Vec::new();
    let mut text = String::new();
    let mut rest = line;

    while let Some(start) = rest.find(':') {
        let after = &rest[start + 1..];
        match after.find(':') {
            Some(len) if is_shortcode(&after[..len]) => {
                text.push_str(&rest[..start]);
                text.push(' ');
                codes.push(&after[..len]);
                rest = &after[len + 1..];
            }
            _ => {
                text.push_str(&rest[..=start]);
                rest = after;
            }
        }
    }
    text.push_str(rest);
    (codes, text)
}

fn is_shortcode(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '+')
}

fn ball_from_shortcode(code: &str) -> Option<Ball> {
    let lower = code.to_lowercase();
    let name = lower.strip_suffix("ball")?;
    Ball::ALL
        .into_iter()
        .find(|ball| ball.name().to_lowercase() == name)
}

/// Collapses free text into one species token of the untagged grammar.
fn species_token(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '.')
        .collect();

    // The grammar splits on whitespace, so multi-word names must collapse
    // first. `canonicalize` expands them again on the way in.
    let collapsed = cleaned.replace("mr. mime", "mime");
    collapsed
        .split_whitespace()
        .map(|word| word.trim_matches(|c| c == '-' || c == '.'))
        .filter(|word| !word.is_empty())
        .collect::<Vec<&str>>()
        .join("-")
}
