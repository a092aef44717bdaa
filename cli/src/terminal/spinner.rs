use std::future::Future;

use indicatif::ProgressStyle;
use tracing::{Instrument, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

pub fn style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// Runs `future` inside a span that renders as a spinner with `message`
/// until it resolves. Log lines emitted meanwhile are printed above it.
pub async fn while_running<F, T>(message: &'static str, future: F) -> T
where
    F: Future<Output = T>,
{
    let span = info_span!("remote");
    span.pb_set_style(&style());
    span.pb_set_message(message);
    future.instrument(span).await
}
