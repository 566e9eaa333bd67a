//! Display titles for events.

use crate::event::CalendarEvent;

/// Produces the display title for an event.
///
/// With `use_link` the title becomes a markdown link to the event URL,
/// carrying the owning calendar's id as a query parameter so the link
/// round-trips to the right calendar. The id is percent-encoded;
/// provider calendar ids routinely contain `@` and `#`.
///
/// Missing pieces render as empty strings, never a panic.
pub fn display_title(event: &CalendarEvent, use_link: bool) -> String {
    if !use_link {
        return event.summary.clone();
    }
    format!(
        "[{}]({}&cal={})",
        event.summary,
        event.html_link,
        urlencoding::encode(&event.parent.id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{CalendarEvent, EventEndpoint};

    fn sample_event() -> CalendarEvent {
        CalendarEvent::new(
            "Standup",
            EventEndpoint::timed("2024-03-01T09:00:00"),
            EventEndpoint::timed("2024-03-01T09:15:00"),
        )
        .with_html_link("https://x/e1")
        .with_calendar_id("cal1")
    }

    #[test]
    fn linked_title() {
        assert_eq!(
            display_title(&sample_event(), true),
            "[Standup](https://x/e1&cal=cal1)"
        );
    }

    #[test]
    fn plain_title_ignores_link_fields() {
        assert_eq!(display_title(&sample_event(), false), "Standup");
    }

    #[test]
    fn encodes_calendar_id() {
        let event = sample_event().with_calendar_id("team@example.com");
        assert_eq!(
            display_title(&event, true),
            "[Standup](https://x/e1&cal=team%40example.com)"
        );
    }

    #[test]
    fn missing_fields_degrade_to_empty() {
        let event = CalendarEvent::default();
        assert_eq!(display_title(&event, true), "[](&cal=)");
        assert_eq!(display_title(&event, false), "");
    }
}
