//! Time resolution for calendar events.
//!
//! Providers ship an event's start and end in one of two shapes: a bare
//! ISO date for all-day events, or a timestamp for timed events.
//! [`EventTime`] is the resolved form of a single endpoint, and
//! [`DateRange`] is the display shape of a start/end pair.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Length of a bare ISO date string (`YYYY-MM-DD`).
pub const ISO_DATE_LEN: usize = 10;

/// A resolved event endpoint.
///
/// Timed endpoints keep the wall-clock time the provider wrote; the
/// offset is parsed but never converted, so display strings match what
/// the user sees in their calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    /// An all-day event date (no time-of-day component).
    AllDay(NaiveDate),
    /// A specific wall-clock instant.
    Timed(NaiveDateTime),
}

impl EventTime {
    /// Parses a bare ISO date (`2024-03-01`).
    pub fn parse_date(s: &str) -> Option<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(Self::AllDay)
    }

    /// Parses a timestamp, with or without a zone offset.
    ///
    /// Accepts RFC 3339 (`2024-03-01T09:00:00+01:00`) and bare
    /// `2024-03-01T09:00:00[.fff]`. Offsets are stripped, not applied.
    pub fn parse_timestamp(s: &str) -> Option<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Self::Timed(dt.naive_local()));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(Self::Timed)
    }

    /// Returns `true` if this is an all-day endpoint.
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay(_))
    }

    /// Returns the calendar date of this endpoint.
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::AllDay(date) => *date,
            Self::Timed(dt) => dt.date(),
        }
    }

    /// Converts to a wall-clock datetime; all-day endpoints count as midnight.
    pub fn to_naive_datetime(&self) -> NaiveDateTime {
        match self {
            Self::AllDay(date) => date.and_hms_opt(0, 0, 0).expect("valid time"),
            Self::Timed(dt) => *dt,
        }
    }

    /// Formats this endpoint as `YYYY-MM-DD HH:MM` (the table-cell form).
    pub fn stamp(&self) -> String {
        self.to_naive_datetime().format("%Y-%m-%d %H:%M").to_string()
    }
}

/// The display shape of an event's start/end pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    /// No time annotation: the event is all-day, or an endpoint could
    /// not be resolved.
    Suppressed,
    /// Start and end fall on the same calendar day.
    SameDay {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// Start and end fall on different calendar days.
    MultiDay { start: NaiveDate, end: NaiveDate },
}

impl DateRange {
    /// Classifies a resolved start/end pair.
    ///
    /// A pair mixing an all-day and a timed endpoint is not suppressed;
    /// the all-day side counts as midnight.
    pub fn between(start: Option<EventTime>, end: Option<EventTime>) -> Self {
        let (Some(start), Some(end)) = (start, end) else {
            return Self::Suppressed;
        };
        if start.is_all_day() && end.is_all_day() {
            return Self::Suppressed;
        }
        let (start, end) = (start.to_naive_datetime(), end.to_naive_datetime());
        if start.date() == end.date() {
            Self::SameDay { start, end }
        } else {
            Self::MultiDay {
                start: start.date(),
                end: end.date(),
            }
        }
    }

    /// Returns `true` if no time annotation should be shown.
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed)
    }

    /// Renders the range: `HH:MM - HH:MM` within a day,
    /// `YYYY-MM-DD - YYYY-MM-DD` across days, empty when suppressed.
    pub fn display(&self) -> String {
        match self {
            Self::Suppressed => String::new(),
            Self::SameDay { start, end } => {
                format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
            }
            Self::MultiDay { start, end } => {
                format!("{} - {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d"))
            }
        }
    }
}
