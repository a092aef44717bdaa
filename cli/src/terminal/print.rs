use std::collections::BTreeMap;
use std::fmt::Display;

use colored::*;
use console::measure_text_width;
use onhands_common::inventory::{Ball, Collection, GameProfile, QuantityVector};

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

const BALL_WIDTH: usize = 8;
const TOTAL_LABEL: &str = "Total";

/// Writes one line of command output to stdout.
///
/// Logging goes to stderr, so results stay pipeable.
pub fn out(msg: &str) {
    println!("{msg}");
}

pub fn header(msg: &str, quiet: bool) {
    if quiet {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = measure_text_width(&formatted);

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    out(&line.to_string());
}

pub fn fat_separator() {
    out(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// `key.....: value`, with the dots filling up to `key_width`.
pub fn aligned_line<V: Display>(key: &str, value: V, key_width: usize) {
    let dots: String = ".".repeat((key_width + 1).saturating_sub(measure_text_width(key)));
    let colon: String = format!(
        "{}{}",
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    out(&format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn key_width<'a, I>(keys: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    keys.into_iter().map(measure_text_width).max().unwrap_or(0)
}

/// Every entry of `collection`, one aligned line each, in sheet order.
pub fn listing(collection: &Collection) {
    let names: Vec<String> = collection.iter().map(|(identity, _)| identity.to_string()).collect();
    let width = key_width(names.iter().map(String::as_str));

    for (name, (_, vector)) in names.iter().zip(collection.iter()) {
        aligned_line(name, vector, width);
    }
}

pub fn not_found(key: &str, key_width: usize) {
    aligned_line(key, "not found".color(colors::MISSING), key_width);
}

/// Ball by game table with a total column and a total row.
pub fn status_table(totals: &BTreeMap<Ball, QuantityVector>, grand_total: &QuantityVector) {
    let widths: Vec<usize> = GameProfile::ALL
        .iter()
        .map(|game| measure_text_width(game.label()).max(3))
        .collect();

    let mut head = format!("{:<BALL_WIDTH$}", "Ball");
    for (game, width) in GameProfile::ALL.iter().zip(&widths) {
        head.push_str(&format!("  {:>width$}", game.label()));
    }
    head.push_str(&format!("  {TOTAL_LABEL:>6}"));
    out(&head.color(colors::PRIMARY).bold().to_string());

    let zero = QuantityVector::zero();
    for ball in Ball::ALL {
        let vector = totals.get(&ball).unwrap_or(&zero);
        out(&table_row(ball.name(), vector, &widths));
    }

    out(&"─".repeat(measure_text_width(&head)).color(colors::SEPARATOR).to_string());
    out(&table_row(TOTAL_LABEL, grand_total, &widths).bold().to_string());
}

fn table_row(name: &str, vector: &QuantityVector, widths: &[usize]) -> String {
    let mut row = format!("{name:<BALL_WIDTH$}").color(colors::TEXT_DEFAULT).to_string();
    for ((_, count), width) in vector.iter().zip(widths) {
        let cell = format!("{count:>width$}");
        if count == 0 {
            row.push_str(&format!("  {}", cell.color(colors::SEPARATOR)));
        } else {
            row.push_str(&format!("  {}", cell.color(colors::ACCENT)));
        }
    }
    row.push_str(&format!("  {:>6}", vector.total()));
    row
}
