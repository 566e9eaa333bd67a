//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use eventmark_core::RenderStyle;

/// eventmark - render calendar events as a markdown block
#[derive(Debug, Parser)]
#[command(name = "eventmark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Events file (a JSON array of event records); stdin when omitted or "-"
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, short, env = "EVENTMARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    // --- Output options ---
    /// Output style
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,

    /// Table columns as dotted field paths (comma-separated or repeated)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Render titles as markdown links back to the calendar
    #[arg(long, overrides_with = "no_link")]
    pub link: bool,

    /// Render titles as plain text
    #[arg(long, overrides_with = "link")]
    pub no_link: bool,

    /// Annotate list entries with a time range
    #[arg(long, overrides_with = "no_time")]
    pub time: bool,

    /// Skip the time range annotation
    #[arg(long, overrides_with = "time")]
    pub no_time: bool,

    /// List the selectable field paths and exit
    #[arg(long)]
    pub list_fields: bool,
}

impl Cli {
    /// Effective `use_link`, with CLI flags overriding the persisted default.
    pub fn use_link(&self, default: bool) -> bool {
        if self.link {
            true
        } else if self.no_link {
            false
        } else {
            default
        }
    }

    /// Effective `use_time`, with CLI flags overriding the persisted default.
    pub fn use_time(&self, default: bool) -> bool {
        if self.time {
            true
        } else if self.no_time {
            false
        } else {
            default
        }
    }
}

/// Style names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    Bullet,
    Checkbox,
    Table,
}

impl From<StyleArg> for RenderStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Bullet => RenderStyle::Bullet,
            StyleArg::Checkbox => RenderStyle::Checkbox,
            StyleArg::Table => RenderStyle::Table,
        }
    }
}
