// NOTE: Command Organization
//
// Subcommands follow the API's entity names (`machine list`, `tenant member list`).
// Every list/describe reads an API dump via -f/--file; operator-only views are
// grouped below `admin`.

mod commands;
mod common;
mod enums;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "metalctlv2")]
#[command(about = "CLI for the metal-stack.io API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Alternative config file (default: $METALCTL_CONFIG or the user config dir)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short = 'o',
        long,
        global = true,
        help = "Output format, defaults to the config file setting or table"
    )]
    pub output_format: Option<OutputFormat>,

    #[arg(
        long,
        global = true,
        help = "Handlebars template for the template output format, rendered per entity"
    )]
    pub template: Option<String>,

    #[arg(long, global = true, help = "Omit the header row of table output")]
    pub no_headers: bool,

    #[arg(long, global = true, help = "Force colored output even without a terminal")]
    pub force_color: bool,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Debug logging, same as --log-level debug")]
    pub debug: bool,

    #[arg(
        long,
        global = true,
        value_parser = humantime::parse_duration,
        help = "How long a machine's last provisioning error counts as recent [default: 7d]"
    )]
    pub last_event_error_threshold: Option<Duration>,

    #[command(subcommand)]
    pub command: Commands,
}
