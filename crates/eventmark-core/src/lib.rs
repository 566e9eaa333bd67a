//! Core types: events, time ranges, field paths, markdown rendering

pub mod event;
pub mod field;
pub mod render;
pub mod time;
pub mod title;
pub mod tracing;

pub use event::{CalendarEvent, CalendarSource, EventEndpoint};
pub use field::{FieldPath, SELECTABLE_FIELDS};
pub use render::{Cursor, RenderConfig, RenderResult, RenderStyle, render};
pub use time::{DateRange, EventTime, ISO_DATE_LEN};
pub use title::display_title;
pub use tracing::{TracingConfig, TracingError, init_tracing};
