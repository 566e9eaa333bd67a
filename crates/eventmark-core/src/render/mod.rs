//! Markdown assembly for event blocks.
//!
//! [`render`] turns an ordered list of events plus a [`RenderConfig`]
//! into one markdown block: a bullet list, a checkbox list, or a table
//! with caller-chosen columns. The caller's insertion point travels
//! through unchanged — this module computes content, never positions,
//! and performs no I/O.

use serde::{Deserialize, Serialize};

use crate::event::CalendarEvent;
use crate::field::FieldPath;
use crate::title::display_title;

/// The output style for an event block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    /// One `- ` line per event.
    #[default]
    Bullet,
    /// One `- [ ] ` line per event.
    Checkbox,
    /// A pipe-delimited table with one column per configured field path.
    Table,
}

impl RenderStyle {
    /// Returns the style name as used on selection surfaces.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bullet => "bullet",
            Self::Checkbox => "checkbox",
            Self::Table => "table",
        }
    }
}

/// Configuration for one render call.
///
/// Built once by the caller and threaded through; the renderer never
/// reads ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// The output style.
    pub style: RenderStyle,
    /// Whether titles render as markdown links.
    pub use_link: bool,
    /// Whether list entries carry a time range annotation.
    pub use_time: bool,
    /// Table columns, in display order. Ignored by the list styles.
    pub columns: Vec<FieldPath>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: RenderStyle::default(),
            use_link: true,
            use_time: true,
            columns: Vec::new(),
        }
    }
}

/// An insertion point in the host document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Zero-based line.
    pub line: u32,
    /// Zero-based character offset within the line.
    pub ch: u32,
}

/// The outcome of a render call: the markdown block plus the caller's
/// insertion point, returned untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    /// The fully assembled markdown block.
    pub text: String,
    /// Where the caller wants the block spliced in.
    pub cursor: Cursor,
}

/// Renders an event block at the given insertion point.
///
/// Pure over its inputs: identical arguments produce byte-identical
/// output.
pub fn render(events: &[CalendarEvent], config: &RenderConfig, cursor: Cursor) -> RenderResult {
    tracing::debug!(
        events = events.len(),
        style = config.style.as_str(),
        "rendering event block"
    );
    let text = match config.style {
        RenderStyle::Bullet => render_list(events, config, "- "),
        RenderStyle::Checkbox => render_list(events, config, "- [ ] "),
        RenderStyle::Table => render_table(events, config),
    };
    RenderResult { text, cursor }
}

/// The time annotation for a list entry; empty when suppressed.
fn time_label(event: &CalendarEvent, use_time: bool) -> String {
    if !use_time {
        return String::new();
    }
    event.date_range().display()
}

/// List styles share one shape: a leading newline (so insertion does
/// not merge with the cursor line), then one prefixed line per event.
fn render_list(events: &[CalendarEvent], config: &RenderConfig, prefix: &str) -> String {
    let mut out = String::new();
    for event in events {
        out.push('\n');
        out.push_str(prefix);
        let time = time_label(event, config.use_time);
        if !time.is_empty() {
            out.push_str(&time);
            out.push(' ');
        }
        out.push_str(&display_title(event, config.use_link));
    }
    out
}

fn render_table(events: &[CalendarEvent], config: &RenderConfig) -> String {
    let mut out = String::new();
    for column in &config.columns {
        out.push_str("| ");
        out.push_str(&column.header());
        out.push(' ');
    }
    out.push_str("|\n");
    for _ in &config.columns {
        out.push_str("| --- ");
    }
    out.push_str("|\n");
    for event in events {
        for column in &config.columns {
            out.push_str("| ");
            out.push_str(&column.resolve(event, config.use_link));
            out.push(' ');
        }
        out.push_str("|\n");
    }
    out
}
