//! List upcoming occurrences.

use anyhow::Result;
use calgrid_core::Event;
use calgrid_core::store::EventStore;
use calgrid_core::upcoming;
use chrono::{Local, NaiveDate};

use crate::render;

pub fn run(store: &impl EventStore, limit: usize, json: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let events = store.load_all();

    // Recurring events project their next date; one-offs count while their
    // start date has not passed.
    let mut entries: Vec<(NaiveDate, &Event)> = events
        .iter()
        .filter_map(|event| {
            let next = if event.recurrence.is_some() {
                upcoming::next_occurrence(event, today)
            } else {
                let start = event.start_date();
                (start >= today).then_some(start)
            };
            next.map(|date| (date, event))
        })
        .collect();

    entries.sort_by_key(|(date, _)| *date);
    entries.truncate(limit);

    if json {
        let payload: Vec<serde_json::Value> = entries
            .iter()
            .map(|(date, event)| serde_json::json!({ "next": date, "event": event }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No upcoming events.");
        return Ok(());
    }

    for (date, event) in &entries {
        println!("{}", render::agenda_line(*date, event, today));
    }
    Ok(())
}
