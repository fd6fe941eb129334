//! In-memory storage for tests and ephemeral sessions.

use super::EventStore;
use crate::event::Event;

/// Store keeping events in a plain vector. Never fails, never persists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: Vec<Event>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl EventStore for MemoryStore {
    fn load_all(&self) -> Vec<Event> {
        self.events.clone()
    }

    fn save_all(&mut self, events: &[Event]) {
        self.events = events.to_vec();
    }
}
