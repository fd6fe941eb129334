//! Delete an event.

use anyhow::Result;
use calgrid_core::store::EventStore;
use dialoguer::Confirm;

pub fn run(store: &mut impl EventStore, id: &str, yes: bool) -> Result<()> {
    let events = store.load_all();
    let event = super::find_event(&events, id)?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{}'?", event.title))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    store.delete(&event.id);
    println!("Deleted '{}'", event.title);
    Ok(())
}
