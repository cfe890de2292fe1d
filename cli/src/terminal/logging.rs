use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

use super::print::PRINT_TARGET;

/// Prefixes log lines with a coloured level badge. Debug and trace lines also
/// name their target. Terminal output on [`PRINT_TARGET`] is written as is.
pub struct CatwatchFormatter;

fn badge(level: &Level) -> ColoredString {
    match *level {
        Level::ERROR => "[-]".red().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::INFO => "[+]".green().bold(),
        Level::DEBUG => "[?]".blue(),
        Level::TRACE => "[ ]".dimmed(),
    }
}

impl<S, N> FormatEvent<S, N> for CatwatchFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            write!(writer, "{} ", badge(meta.level()))?;
            if *meta.level() >= Level::DEBUG {
                write!(writer, "{} ", meta.target().bright_black())?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Level filter for a quiet level. `RUST_LOG` replaces the default, but
/// terminal output stays enabled either way.
fn build_filter(quiet: u8, env: Option<&str>) -> anyhow::Result<EnvFilter> {
    let default_level = if quiet > 1 { "warn" } else { "info" };
    let base = match env {
        Some(spec) => EnvFilter::try_new(spec)?,
        None => EnvFilter::new(default_level),
    };
    let print: Directive = format!("{PRINT_TARGET}=info").parse()?;
    Ok(base.add_directive(print))
}

/// Installs the global subscriber.
pub fn init_logging(quiet: u8) -> anyhow::Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(quiet, env.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(CatwatchFormatter)
        .init();
    Ok(())
}
