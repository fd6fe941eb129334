//! Search events by title or description.

use anyhow::Result;
use calgrid_core::search::filter_events;
use calgrid_core::store::EventStore;

use crate::render;

pub fn run(store: &impl EventStore, query: &str, json: bool) -> Result<()> {
    let events = store.load_all();
    let matches = filter_events(&events, query);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("No events matching '{}'.", query.trim());
        return Ok(());
    }

    for event in &matches {
        println!("{}", render::event_line(event));
    }
    Ok(())
}
