//! Event types for calendar records.
//!
//! [`CalendarEvent`] mirrors the provider wire shape: a handful of
//! typed fields the renderer has logic for, plus a flattened map of
//! everything else so dotted field paths can reach arbitrary nested
//! data (description, location, attendees, ...).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::time::{DateRange, EventTime, ISO_DATE_LEN};

/// One end of an event, as providers ship it.
///
/// Exactly one of `date` / `date_time` should be populated; both are
/// kept optional because feeds do not always honor that, and the
/// renderer degrades instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventEndpoint {
    /// Bare ISO date (`2024-03-01`) for all-day events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Timestamp (`2024-03-01T09:00:00+01:00`) for timed events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// IANA timezone identifier, when the provider includes one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EventEndpoint {
    /// Creates an all-day endpoint from a bare ISO date.
    pub fn all_day(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            ..Self::default()
        }
    }

    /// Creates a timed endpoint from a timestamp string.
    pub fn timed(stamp: impl Into<String>) -> Self {
        Self {
            date_time: Some(stamp.into()),
            ..Self::default()
        }
    }

    /// Returns `true` if this endpoint carries a bare date.
    pub fn is_all_day(&self) -> bool {
        self.date.as_deref().is_some_and(|d| d.len() == ISO_DATE_LEN)
    }

    /// Resolves this endpoint to a point in time.
    ///
    /// `date` wins over `date_time` when both are present; a malformed
    /// `date` falls back to `date_time`; anything else is `None`.
    pub fn resolve(&self) -> Option<EventTime> {
        if let Some(t) = self.date.as_deref().and_then(EventTime::parse_date) {
            return Some(t);
        }
        self.date_time.as_deref().and_then(EventTime::parse_timestamp)
    }
}

/// The calendar an event belongs to (`parent` on the wire).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarSource {
    /// Provider identifier for the calendar.
    pub id: String,
}

/// A calendar event record.
///
/// Every typed field defaults to empty so partial records deserialize
/// without error; fields the renderer has no logic for land in `extra`
/// and stay reachable through dotted field paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarEvent {
    /// The event title.
    pub summary: String,
    /// When the event starts.
    pub start: EventEndpoint,
    /// When the event ends.
    pub end: EventEndpoint,
    /// Canonical web URL for the event.
    pub html_link: String,
    /// The owning calendar.
    pub parent: CalendarSource,
    /// Every other provider field, keyed as shipped.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CalendarEvent {
    /// Creates an event with the fields the renderer requires.
    pub fn new(summary: impl Into<String>, start: EventEndpoint, end: EventEndpoint) -> Self {
        Self {
            summary: summary.into(),
            start,
            end,
            ..Self::default()
        }
    }

    /// Builder method to set the event URL.
    pub fn with_html_link(mut self, html_link: impl Into<String>) -> Self {
        self.html_link = html_link.into();
        self
    }

    /// Builder method to set the owning calendar id.
    pub fn with_calendar_id(mut self, id: impl Into<String>) -> Self {
        self.parent = CalendarSource { id: id.into() };
        self
    }

    /// Builder method to attach an untyped provider field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Returns `true` if both endpoints are all-day.
    pub fn is_all_day(&self) -> bool {
        self.start.is_all_day() && self.end.is_all_day()
    }

    /// Resolves the start/end pair into its display shape.
    pub fn date_range(&self) -> DateRange {
        DateRange::between(self.start.resolve(), self.end.resolve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn timed_event() -> CalendarEvent {
        CalendarEvent::new(
            "Standup",
            EventEndpoint::timed("2024-03-01T09:00:00+01:00"),
            EventEndpoint::timed("2024-03-01T09:15:00+01:00"),
        )
    }

    mod endpoints {
        use super::*;

        #[test]
        fn date_wins_over_date_time() {
            let endpoint = EventEndpoint {
                date: Some("2024-03-01".into()),
                date_time: Some("2024-03-05T10:00:00".into()),
                time_zone: None,
            };
            let resolved = endpoint.resolve().unwrap();
            assert!(resolved.is_all_day());
            assert_eq!(resolved.stamp(), "2024-03-01 00:00");
        }

        #[test]
        fn malformed_date_falls_back_to_date_time() {
            let endpoint = EventEndpoint {
                date: Some("??".into()),
                date_time: Some("2024-03-05T10:00:00".into()),
                time_zone: None,
            };
            assert_eq!(endpoint.resolve().unwrap().stamp(), "2024-03-05 10:00");
        }

        #[test]
        fn unresolvable_endpoint() {
            assert_eq!(EventEndpoint::default().resolve(), None);
            assert_eq!(EventEndpoint::timed("??").resolve(), None);
        }

        #[test]
        fn all_day_detection() {
            assert!(EventEndpoint::all_day("2024-03-01").is_all_day());
            assert!(!EventEndpoint::timed("2024-03-01T09:00:00").is_all_day());
        }
    }

    mod records {
        use super::*;

        #[test]
        fn builder_pattern() {
            let event = timed_event()
                .with_html_link("https://calendar.example/evt/1")
                .with_calendar_id("work")
                .with_field("location", "Room 4");

            assert_eq!(event.summary, "Standup");
            assert_eq!(event.html_link, "https://calendar.example/evt/1");
            assert_eq!(event.parent.id, "work");
            assert_eq!(event.extra["location"], json!("Room 4"));
        }

        #[test]
        fn all_day_event() {
            let event = CalendarEvent::new(
                "Offsite",
                EventEndpoint::all_day("2024-03-04"),
                EventEndpoint::all_day("2024-03-05"),
            );
            assert!(event.is_all_day());
            assert!(event.date_range().is_suppressed());
        }

        #[test]
        fn deserializes_provider_record() {
            let event: CalendarEvent = serde_json::from_value(json!({
                "summary": "Planning",
                "start": {"dateTime": "2024-03-01T09:00:00+01:00", "timeZone": "Europe/Paris"},
                "end": {"dateTime": "2024-03-01T10:00:00+01:00"},
                "htmlLink": "https://calendar.example/evt/2",
                "parent": {"id": "team"},
                "description": "Quarterly planning",
                "location": {"building": "HQ", "room": "4A"}
            }))
            .unwrap();

            assert_eq!(event.summary, "Planning");
            assert_eq!(event.start.time_zone.as_deref(), Some("Europe/Paris"));
            assert_eq!(event.parent.id, "team");
            assert_eq!(event.extra["description"], json!("Quarterly planning"));
            assert_eq!(event.extra["location"]["room"], json!("4A"));
        }

        #[test]
        fn deserializes_empty_record() {
            let event: CalendarEvent = serde_json::from_str("{}").unwrap();
            assert_eq!(event.summary, "");
            assert_eq!(event.start.resolve(), None);
            assert!(!event.is_all_day());
        }

        #[test]
        fn serde_roundtrip() {
            let event = timed_event()
                .with_html_link("https://calendar.example/evt/1")
                .with_field("description", "daily sync");

            let json = serde_json::to_string(&event).unwrap();
            let parsed: CalendarEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(event, parsed);
        }
    }
}
