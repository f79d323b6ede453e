pub mod day;
pub mod document;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod ingest;
pub mod persistence;
pub mod query;
pub mod time;

pub use day::{ParseDayError, Weekday, parse_day_codes};
pub use document::{Course, DocumentBuilder, OccupiedSlot, ScheduleDocument};
pub use ingest::{IngestSummary, RawRow, SkipReason, classify_row, ingest_dir, ingest_files};
pub use persistence::{
    PersistenceError, load_document_from_json, save_document_to_json, validate_document,
};
pub use query::{
    AvailabilityReport, QueryError, WeekSchedule, availability, next_class, occupying_class,
    parse_query, room_week,
};
pub use time::{ParseTimeError, TimeOfDay, parse_meeting_times};
