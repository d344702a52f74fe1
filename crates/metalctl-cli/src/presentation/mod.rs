//! Everything between a sorted entity list and the terminal.
//!
//! ```text
//! handler ──> Renderable::table ──> TableData ──> Printer ──> stdout
//!                                         (table | wide | markdown)
//! handler ──────────────────────────────────────> Printer ──> stdout
//!                                         (json | yaml | template)
//! ```
//!
//! Tables never reorder their input; whatever order the handler produced is
//! the order printed.

pub mod formatters;
pub mod renderers;
pub mod tables;

pub use renderers::Printer;
pub use tables::{RenderContext, Renderable, SwitchDetail, TableData};
