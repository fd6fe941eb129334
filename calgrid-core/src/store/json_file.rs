//! JSON file storage.
//!
//! The full event set lives in one JSON array on disk. Reads of a missing
//! or malformed file produce an empty set; the failure is logged and never
//! surfaced past the store.

use std::path::{Path, PathBuf};

use super::EventStore;
use crate::error::{CalGridError, CalGridResult};
use crate::event::Event;

/// File-backed store holding the event set as a single JSON array.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Default location under the platform data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calgrid")
            .join("events.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> CalGridResult<Vec<Event>> {
        let content = std::fs::read_to_string(&self.path)?;
        let mut events: Vec<Event> = serde_json::from_str(&content)
            .map_err(|e| CalGridError::Serialization(e.to_string()))?;

        // Files written by other tooling may carry a zero interval; clamp
        // on the way in so evaluation can rely on interval >= 1.
        for event in events.iter_mut() {
            if let Some(pattern) = event.recurrence.as_mut() {
                if pattern.interval < 1 {
                    pattern.interval = 1;
                }
            }
        }

        Ok(events)
    }

    fn write(&self, events: &[Event]) -> CalGridResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(events)
            .map_err(|e| CalGridError::Serialization(e.to_string()))?;

        // Stage into a temp file, then rename into place
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl EventStore for JsonFileStore {
    fn load_all(&self) -> Vec<Event> {
        if !self.path.exists() {
            return Vec::new();
        }

        match self.read() {
            Ok(events) => events,
            Err(err) => {
                log::warn!(
                    "failed to load events from {}: {err}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    fn save_all(&mut self, events: &[Event]) {
        if let Err(err) = self.write(events) {
            log::warn!("failed to save events to {}: {err}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventDraft, RecurrenceKind, RecurrencePattern};
    use chrono::{TimeZone, Utc};

    fn event(title: &str) -> Event {
        Event::create(
            EventDraft {
                title: title.to_string(),
                start: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
                end: None,
                description: String::new(),
                color: "blue".to_string(),
                recurrence: Some(RecurrencePattern::every(RecurrenceKind::Daily, 2)),
            },
            Utc::now(),
        )
    }

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("events.json"));

        assert!(store.load_all().is_empty());
    }

    #[test]
    fn malformed_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "not json at all {").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn save_then_load_preserves_events_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("events.json"));

        let a = event("First");
        let b = event("Second");
        store.save_all(&[a.clone(), b.clone()]);

        let loaded = store.load_all();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0], a);
        assert_eq!(loaded[1], b);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested/deeper/events.json"));

        store.save_all(&[event("Only")]);
        assert_eq!(store.load_all().len(), 1);
    }

    #[test]
    fn zero_interval_is_clamped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");

        let mut store = JsonFileStore::new(&path);
        store.save_all(&[event("Broken")]);

        // Corrupt the interval on disk the way foreign tooling might
        let content = std::fs::read_to_string(&path)
            .unwrap()
            .replace("\"interval\": 2", "\"interval\": 0");
        std::fs::write(&path, content).unwrap();

        let loaded = store.load_all();
        assert_eq!(loaded[0].recurrence.as_ref().unwrap().interval, 1);
    }
}
