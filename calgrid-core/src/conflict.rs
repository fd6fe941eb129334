//! Same-day conflict detection.

use crate::event::Event;

/// Check whether two events land on the same calendar date.
///
/// Time of day and duration are ignored: this is a coarse day-level check,
/// not a time-range overlap test. Symmetric by construction.
pub fn same_day(a: &Event, b: &Event) -> bool {
    a.start_date() == b.start_date()
}
