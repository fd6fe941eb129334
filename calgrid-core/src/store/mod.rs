//! Event persistence boundary.
//!
//! The core treats storage as an atomic read-all/write-all resource. Add,
//! update and delete are load-mutate-save compositions on top of the two
//! primitives, not separate persistence operations.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::event::Event;

/// Durable mapping from event id to event record.
///
/// Implementations swallow their own failures: a read that goes wrong
/// yields an empty set and a write that goes wrong is a logged no-op.
/// Nothing downstream of this trait sees a storage error.
pub trait EventStore {
    /// Load every stored event, in stored order.
    fn load_all(&self) -> Vec<Event>;

    /// Replace the stored set wholesale.
    fn save_all(&mut self, events: &[Event]);

    /// Append one event.
    fn add(&mut self, event: Event) {
        let mut events = self.load_all();
        events.push(event);
        self.save_all(&events);
    }

    /// Replace the stored event with the same id, if any.
    fn update(&mut self, updated: &Event) {
        let mut events = self.load_all();
        for event in events.iter_mut() {
            if event.id == updated.id {
                *event = updated.clone();
            }
        }
        self.save_all(&events);
    }

    /// Remove the event with the given id, if present.
    fn delete(&mut self, id: &str) {
        let mut events = self.load_all();
        events.retain(|event| event.id != id);
        self.save_all(&events);
    }
}
