//! Move an event to a new start.

use anyhow::Result;
use calgrid_core::event::EventPatch;
use calgrid_core::store::EventStore;
use calgrid_core::{conflict, dates};
use chrono::Utc;

pub fn run(store: &mut impl EventStore, id: &str, start: &str) -> Result<()> {
    let events = store.load_all();
    let event = super::find_event(&events, id)?;

    let new_start = dates::parse_datetime(start)?;
    // Keep the duration: the end shifts by the same amount as the start
    let delta = new_start - event.start;

    let patch = EventPatch {
        start: Some(new_start),
        end: event.end.map(|end| end + delta),
        ..Default::default()
    };
    let updated = event.apply(patch, Utc::now());

    let clashes: Vec<String> = events
        .iter()
        .filter(|e| e.id != updated.id && conflict::same_day(e, &updated))
        .map(|e| e.title.clone())
        .collect();

    store.update(&updated);
    println!(
        "Rescheduled '{}' to {}",
        updated.title,
        new_start.format("%Y-%m-%d %H:%M")
    );
    for title in clashes {
        println!("  note: shares the day with '{title}'");
    }
    Ok(())
}
