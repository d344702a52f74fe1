// NOTE: metalctlv2 layering
//
// args       clap command tree, nothing but parsing
// commands   dispatch from parsed args to handlers
// handlers   load entities, filter, sort, hand them to a printer
// source     where entities come from (API dumps on disk or stdin)
// presentation  Renderable tables and the printers that turn them into text
//
// Sorting and tree flattening live in metalctl-engine so they can be tested
// without any of the CLI around them.

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod source;

pub use args::{Cli, Commands, LogLevel, OutputFormat};
pub use commands::run;
