//! Dotted field paths for table columns.
//!
//! A [`FieldPath`] addresses one column of the table style: `.summary`,
//! `.start.dateTime`, `.location.building`. Known fields resolve
//! through typed accessors with per-field special-casing; everything
//! else falls back to a generic traversal of the event's untyped
//! fields. Lookups never fail — a miss is an empty cell.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::event::CalendarEvent;
use crate::time::EventTime;
use crate::title::display_title;

/// The fixed set of paths offered on selection surfaces.
pub const SELECTABLE_FIELDS: &[&str] = &[
    ".summary",
    ".description",
    ".location",
    ".start.date",
    ".start.dateTime",
    ".start.timeZone",
    ".end.date",
    ".end.dateTime",
    ".end.timeZone",
    ".htmlLink",
    ".parent.id",
];

/// A dotted field path with a leading separator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    /// Creates a path, normalizing a missing leading separator.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.starts_with('.') {
            Self(path)
        } else {
            Self(format!(".{path}"))
        }
    }

    /// Returns the path as written, leading separator included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.0
            .trim_start_matches('.')
            .split('.')
            .filter(|s| !s.is_empty())
    }

    /// Derives the column header: segments joined by spaces, upper-cased.
    ///
    /// `.start.dateTime` becomes `START DATETIME`.
    pub fn header(&self) -> String {
        self.segments().collect::<Vec<_>>().join(" ").to_uppercase()
    }

    /// Resolves this path against an event.
    ///
    /// Special cases, each short-circuiting the generic lookup:
    /// 1. exactly `.summary` — the display title, so the summary column
    ///    is a link whenever `use_link` is on;
    /// 2. a `start` path not naming `timeZone` — the resolved start as
    ///    `YYYY-MM-DD HH:MM`;
    /// 3. the same for `end`.
    pub fn resolve(&self, event: &CalendarEvent, use_link: bool) -> String {
        let segments: Vec<&str> = self.segments().collect();
        if segments.as_slice() == ["summary"] {
            return display_title(event, use_link);
        }
        match segments.first().copied() {
            Some("start") if !segments.contains(&"timeZone") => {
                return stamp(event.start.resolve());
            }
            Some("end") if !segments.contains(&"timeZone") => {
                return stamp(event.end.resolve());
            }
            _ => {}
        }
        lookup(event, &segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn stamp(time: Option<EventTime>) -> String {
    time.map(|t| t.stamp()).unwrap_or_default()
}

/// Tagged lookup over the known field set, then the untyped fields.
fn lookup(event: &CalendarEvent, segments: &[&str]) -> String {
    match segments {
        ["htmlLink"] => event.html_link.clone(),
        ["parent", "id"] => event.parent.id.clone(),
        ["start", "timeZone"] => event.start.time_zone.clone().unwrap_or_default(),
        ["end", "timeZone"] => event.end.time_zone.clone().unwrap_or_default(),
        _ => lookup_extra(event, segments),
    }
}

fn lookup_extra(event: &CalendarEvent, segments: &[&str]) -> String {
    let Some((first, rest)) = segments.split_first() else {
        return String::new();
    };
    let Some(mut current) = event.extra.get(*first) else {
        return String::new();
    };
    for segment in rest {
        match current.as_object().and_then(|m| m.get(*segment)) {
            Some(value) => current = value,
            None => return String::new(),
        }
    }
    scalar_display(current)
}

/// Renders a leaf value for a table cell; non-scalar leaves are empty.
fn scalar_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
