use std::sync::atomic::{AtomicUsize, Ordering};

use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

use crate::terminal::spinner;

const HEARTS: [&str; 9] = ["❤️", "🧡", "💛", "💚", "💙", "💜", "🖤", "🤍", "🤎"];

/// Installs the global subscriber.
///
/// `RUST_LOG` is honoured unless `quiet` is set, which pins the filter to
/// warnings so only problems and command output are shown.
pub fn init_logging(quiet: bool) {
    let indicatif_layer = IndicatifLayer::new().with_progress_style(spinner::style());

    let filter = if quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(OnHandsFormatter::default())
                .with_writer(indicatif_layer.get_stderr_writer()),
        )
        .with(indicatif_layer)
        .init();
}

/// Prefixes info lines with the next heart in the cycle and everything
/// else with a level symbol.
#[derive(Default)]
pub struct OnHandsFormatter {
    beat: AtomicUsize,
}

impl OnHandsFormatter {
    fn next_heart(&self) -> &'static str {
        let beat = self.beat.fetch_add(1, Ordering::Relaxed);
        HEARTS[beat % HEARTS.len()]
    }
}

impl<S, N> FormatEvent<S, N> for OnHandsFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let mut message = String::new();
        ctx.field_format()
            .format_fields(Writer::new(&mut message), event)?;

        if *meta.level() == Level::INFO {
            return writeln!(writer, " {} {}", self.next_heart(), message.bold());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            _ => ("[-]", |s| s.red().bold()),
        };

        writeln!(writer, "{} {}", color_func(symbol.into()), message)
    }
}
