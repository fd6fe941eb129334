//! Substring search over the event set.

use crate::event::Event;

/// Filter events by a case-insensitive substring match on title or
/// description, preserving input order.
///
/// A blank or whitespace-only query returns the input unchanged.
pub fn filter_events(events: &[Event], query: &str) -> Vec<Event> {
    let query = query.trim();
    if query.is_empty() {
        return events.to_vec();
    }

    let query = query.to_lowercase();
    events
        .iter()
        .filter(|event| {
            event.title.to_lowercase().contains(&query)
                || event.description.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}
