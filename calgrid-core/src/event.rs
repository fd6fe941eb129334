//! Event model and lifecycle.
//!
//! Events are plain serializable records. The store owns them; the rest of
//! the crate treats them as read-only input and produces new records
//! instead of mutating in place.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier, assigned once at creation.
    pub id: String,
    pub title: String,
    /// Start of the event. Day-level logic truncates this to a calendar date.
    pub start: DateTime<Utc>,
    /// Optional end, for events with a duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    pub description: String,
    /// Palette token id (see [`PALETTE`]).
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrencePattern>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// How often a recurring event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    Daily,
    Weekly,
    Monthly,
    Custom,
}

/// Recurrence rule attached to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrencePattern {
    pub kind: RecurrenceKind,
    /// Repeat every N days/weeks/months. Always >= 1.
    pub interval: u32,
    /// Weekday indices, 0 = Sunday .. 6 = Saturday. Only consulted for
    /// weekly patterns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<u8>,
    /// Last date of the series, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Declared occurrence cap. Carried through storage but not consulted
    /// by evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl RecurrencePattern {
    /// Build a pattern repeating every `interval` units of `kind`.
    ///
    /// An interval of zero is clamped to one here, so evaluation can rely
    /// on `interval >= 1`.
    pub fn every(kind: RecurrenceKind, interval: u32) -> Self {
        RecurrencePattern {
            kind,
            interval: interval.max(1),
            days_of_week: Vec::new(),
            end_date: None,
            count: None,
        }
    }

    /// Restrict a weekly pattern to specific weekdays (0 = Sunday).
    pub fn on_days(mut self, days: Vec<u8>) -> Self {
        self.days_of_week = days;
        self
    }

    /// Stop the series after `date` (inclusive).
    pub fn until(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }
}

/// Form input for a new event: everything except the fields the lifecycle
/// assigns itself.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub description: String,
    pub color: String,
    pub recurrence: Option<RecurrencePattern>,
}

/// Partial update for an existing event. `None` fields keep the stored
/// value; `recurrence: Some(None)` clears the pattern.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub recurrence: Option<Option<RecurrencePattern>>,
}

impl Event {
    /// Create a new event from form input, assigning a fresh id and
    /// stamping both timestamps with `now`.
    pub fn create(draft: EventDraft, now: DateTime<Utc>) -> Event {
        Event {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            start: draft.start,
            end: draft.end,
            description: draft.description,
            color: draft.color,
            recurrence: draft.recurrence,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, refreshing `updated_at`.
    ///
    /// `id` and `created_at` are copied through untouched no matter what
    /// the patch contains.
    pub fn apply(&self, patch: EventPatch, now: DateTime<Utc>) -> Event {
        Event {
            id: self.id.clone(),
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            start: patch.start.unwrap_or(self.start),
            end: patch.end.or(self.end),
            description: patch
                .description
                .unwrap_or_else(|| self.description.clone()),
            color: patch.color.unwrap_or_else(|| self.color.clone()),
            recurrence: match patch.recurrence {
                Some(recurrence) => recurrence,
                None => self.recurrence.clone(),
            },
            created_at: self.created_at,
            updated_at: now,
        }
    }

    /// Calendar date of the event start, time of day dropped.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }
}

/// A selectable display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub id: &'static str,
    pub name: &'static str,
    pub hex: &'static str,
}

/// Colors offered when creating an event. `Event::color` holds one of the
/// ids.
pub const PALETTE: &[ColorOption] = &[
    ColorOption { id: "blue", name: "Blue", hex: "#3B82F6" },
    ColorOption { id: "green", name: "Green", hex: "#10B981" },
    ColorOption { id: "red", name: "Red", hex: "#EF4444" },
    ColorOption { id: "yellow", name: "Yellow", hex: "#F59E0B" },
    ColorOption { id: "purple", name: "Purple", hex: "#8B5CF6" },
    ColorOption { id: "pink", name: "Pink", hex: "#EC4899" },
    ColorOption { id: "indigo", name: "Indigo", hex: "#6366F1" },
    ColorOption { id: "gray", name: "Gray", hex: "#6B7280" },
];

/// Look up a palette entry by token id.
pub fn color_by_id(id: &str) -> Option<&'static ColorOption> {
    PALETTE.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            start: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            end: None,
            description: String::new(),
            color: "blue".to_string(),
            recurrence: None,
        }
    }

    #[test]
    fn create_assigns_id_and_stamps_both_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let event = Event::create(draft("Standup"), now);

        assert!(!event.id.is_empty());
        assert_eq!(event.created_at, now);
        assert_eq!(event.updated_at, now);
    }

    #[test]
    fn create_assigns_distinct_ids() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let a = Event::create(draft("A"), now);
        let b = Event::create(draft("B"), now);

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn apply_preserves_id_and_created_at() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap();
        let event = Event::create(draft("Standup"), created);

        let patch = EventPatch {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let updated = event.apply(patch, later);

        assert_eq!(updated.id, event.id);
        assert_eq!(updated.created_at, created);
        assert_eq!(updated.updated_at, later);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.start, event.start);
    }

    #[test]
    fn apply_can_clear_recurrence() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut form = draft("Standup");
        form.recurrence = Some(RecurrencePattern::every(RecurrenceKind::Weekly, 1));
        let event = Event::create(form, now);

        let patch = EventPatch {
            recurrence: Some(None),
            ..Default::default()
        };
        let updated = event.apply(patch, now);

        assert!(updated.recurrence.is_none());
    }

    #[test]
    fn zero_interval_is_clamped_to_one() {
        let pattern = RecurrencePattern::every(RecurrenceKind::Daily, 0);
        assert_eq!(pattern.interval, 1);
    }

    #[test]
    fn events_serialize_with_camel_case_keys() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let mut form = draft("Standup");
        form.recurrence = Some(
            RecurrencePattern::every(RecurrenceKind::Weekly, 1)
                .on_days(vec![1, 3])
                .until(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()),
        );
        let event = Event::create(form, now);

        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        let recurrence = value.get("recurrence").unwrap();
        assert_eq!(recurrence.get("kind").unwrap(), "weekly");
        assert!(recurrence.get("daysOfWeek").is_some());
        assert!(recurrence.get("endDate").is_some());
    }

    #[test]
    fn palette_lookup_by_token() {
        assert_eq!(color_by_id("blue").unwrap().hex, "#3B82F6");
        assert!(color_by_id("taupe").is_none());
    }
}
