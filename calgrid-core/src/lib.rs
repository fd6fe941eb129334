//! Core engine for calgrid.
//!
//! Everything the calendar application needs short of a UI: the event
//! model, recurrence evaluation, next-occurrence projection, month-grid
//! materialization, search, conflict detection and the storage boundary.
//!
//! Evaluation is pure and day-granular. "Now" is always passed in
//! explicitly so callers control the clock, and the store is an injected
//! dependency rather than ambient state.

pub mod conflict;
pub mod dates;
pub mod error;
pub mod event;
pub mod grid;
pub mod recurrence;
pub mod search;
pub mod store;
pub mod upcoming;

pub use error::{CalGridError, CalGridResult};
pub use event::{Event, EventDraft, EventPatch, RecurrenceKind, RecurrencePattern};
pub use grid::{DEFAULT_WEEK_START, DayCell, build_month};
pub use store::{EventStore, JsonFileStore, MemoryStore};
