//! Header and rows per entity type.
//!
//! Each entity implements [`Renderable`]; printers never look at concrete
//! entity types. Rows are plain strings, already colored through the
//! [`Palette`] of the [`RenderContext`].

mod context;
mod health;
mod image;
mod ip;
mod machine;
mod network;
mod partition;
mod project;
mod size;
mod switch;
mod task;
mod tenant;
mod token;
mod vpn;

pub use partition::DIVIDER;
pub use switch::SwitchDetail;

use crate::presentation::formatters::Palette;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Default for `--last-event-error-threshold`.
pub const DEFAULT_LAST_EVENT_ERROR_THRESHOLD: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Everything a table needs besides the entities themselves.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub wide: bool,
    pub now: DateTime<Utc>,
    pub last_event_error_threshold: Duration,
    pub palette: Palette,
}

impl RenderContext {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            wide: false,
            now,
            last_event_error_threshold: DEFAULT_LAST_EVENT_ERROR_THRESHOLD,
            palette: Palette::plain(),
        }
    }

    pub fn wide(mut self, wide: bool) -> Self {
        self.wide = wide;
        self
    }
}

/// Output of a [`Renderable`] ready for a printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Whether long cells may wrap; tables with aligned multi-line cells turn it off.
    pub auto_wrap: bool,
}

pub trait Renderable: Sized {
    const AUTO_WRAP: bool = true;

    fn header(wide: bool) -> Vec<&'static str>;

    /// One entity may span several rows (switch ports, health partitions).
    fn rows(&self, ctx: &RenderContext) -> Vec<Vec<String>>;

    fn table(items: &[Self], ctx: &RenderContext) -> TableData {
        TableData {
            header: Self::header(ctx.wide).into_iter().map(String::from).collect(),
            rows: items.iter().flat_map(|item| item.rows(ctx)).collect(),
            auto_wrap: Self::AUTO_WRAP,
        }
    }
}

/// Header and rows as `|a|b|` lines, newlines inside cells shown as `\n` and
/// non-breaking spaces as `␣`.
#[cfg(test)]
pub(crate) fn render_plain<T: Renderable>(items: &[T], ctx: &RenderContext) -> String {
    let table = T::table(items, ctx);
    std::iter::once(table.header)
        .chain(table.rows)
        .map(|row| {
            format!("|{}|", row.join("|"))
                .replace('\n', "\\n")
                .replace('\u{a0}', "␣")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
pub(crate) fn test_now() -> DateTime<Utc> {
    use chrono::TimeZone;
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}
