//! Recurrence evaluation.
//!
//! Decides whether a recurring event occurs on a given calendar date. All
//! matching is day-granular: time of day never affects the result.

use chrono::{Datelike, NaiveDate};

use crate::event::{Event, RecurrenceKind};

/// Check whether `event`'s recurrence puts it on `date`.
///
/// Returns false for events without a pattern; direct start-date matches
/// are the materializer's job, not this one's. Pure and deterministic.
///
/// Expects `interval >= 1`; patterns are clamped when constructed and when
/// loaded from storage.
pub fn occurs_on(event: &Event, date: NaiveDate) -> bool {
    let Some(pattern) = &event.recurrence else {
        return false;
    };

    let start = event.start_date();

    // Series has not started yet
    if date < start {
        return false;
    }

    // Series has ended (end date is inclusive)
    if let Some(end) = pattern.end_date {
        if date > end {
            return false;
        }
    }

    let interval = i64::from(pattern.interval);

    match pattern.kind {
        RecurrenceKind::Daily => {
            let days = (date - start).num_days();
            days % interval == 0
        }
        RecurrenceKind::Weekly => {
            let weekday = date.weekday().num_days_from_sunday() as u8;
            if pattern.days_of_week.is_empty() {
                // No explicit days: match the weekday the series started on
                if weekday != start.weekday().num_days_from_sunday() as u8 {
                    return false;
                }
            } else if !pattern.days_of_week.contains(&weekday) {
                return false;
            }

            let week_index = (date - start).num_days() / 7;
            week_index % interval == 0
        }
        RecurrenceKind::Monthly => {
            // Series anchored on day 29-31 skip months without that day
            if date.day() != start.day() {
                return false;
            }
            let months = month_index(date) - month_index(start);
            months % interval == 0
        }
        // No custom rule language yet; custom patterns never match
        RecurrenceKind::Custom => false,
    }
}

/// Months since year zero, for month-distance arithmetic.
fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventDraft, RecurrencePattern};
    use chrono::Utc;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn recurring(start: &str, pattern: RecurrencePattern) -> Event {
        let start = day(start).and_hms_opt(9, 30, 0).unwrap().and_utc();
        Event::create(
            EventDraft {
                title: "Test".to_string(),
                start,
                end: None,
                description: String::new(),
                color: "blue".to_string(),
                recurrence: Some(pattern),
            },
            Utc::now(),
        )
    }

    #[test]
    fn non_recurring_events_never_match() {
        let mut event = recurring(
            "2024-01-01",
            RecurrencePattern::every(RecurrenceKind::Daily, 1),
        );
        event.recurrence = None;

        assert!(!occurs_on(&event, day("2024-01-01")));
    }

    #[test]
    fn daily_occurs_on_its_own_start_date() {
        let event = recurring(
            "2024-01-01",
            RecurrencePattern::every(RecurrenceKind::Daily, 3),
        );

        assert!(occurs_on(&event, day("2024-01-01")));
    }

    #[test]
    fn daily_interval_arithmetic() {
        let event = recurring(
            "2024-01-01",
            RecurrencePattern::every(RecurrenceKind::Daily, 3),
        );

        assert!(occurs_on(&event, day("2024-01-04")));
        assert!(occurs_on(&event, day("2024-01-07")));
        assert!(!occurs_on(&event, day("2024-01-02")));
        assert!(!occurs_on(&event, day("2024-01-03")));
    }

    #[test]
    fn time_of_day_does_not_perturb_daily_matching() {
        // Start carries 09:30; candidate dates are midnights. The integer
        // day count must still line up.
        let event = recurring(
            "2024-01-01",
            RecurrencePattern::every(RecurrenceKind::Daily, 2),
        );

        assert!(occurs_on(&event, day("2024-01-03")));
        assert!(!occurs_on(&event, day("2024-01-04")));
    }

    #[test]
    fn nothing_before_the_series_start() {
        let event = recurring(
            "2024-01-10",
            RecurrencePattern::every(RecurrenceKind::Daily, 1),
        );

        assert!(!occurs_on(&event, day("2024-01-09")));
        assert!(!occurs_on(&event, day("2023-12-31")));
    }

    #[test]
    fn end_date_is_inclusive() {
        let event = recurring(
            "2024-01-01",
            RecurrencePattern::every(RecurrenceKind::Daily, 1).until(day("2024-01-05")),
        );

        assert!(occurs_on(&event, day("2024-01-05")));
        assert!(!occurs_on(&event, day("2024-01-06")));
    }

    #[test]
    fn weekly_with_explicit_days_mon_wed() {
        // Start Monday 2024-01-01; Mondays and Wednesdays, every week.
        let event = recurring(
            "2024-01-01",
            RecurrencePattern::every(RecurrenceKind::Weekly, 1).on_days(vec![1, 3]),
        );

        let hits: Vec<NaiveDate> = day("2024-01-01")
            .iter_days()
            .take(28)
            .filter(|d| occurs_on(&event, *d))
            .collect();

        // Four consecutive weeks: exactly 8 occurrences
        assert_eq!(hits.len(), 8);
        for hit in hits {
            let dow = hit.weekday().num_days_from_sunday();
            assert!(dow == 1 || dow == 3, "unexpected weekday on {hit}");
        }
    }

    #[test]
    fn weekly_without_days_falls_back_to_start_weekday() {
        // Start Monday 2024-01-01
        let event = recurring(
            "2024-01-01",
            RecurrencePattern::every(RecurrenceKind::Weekly, 1),
        );

        assert!(occurs_on(&event, day("2024-01-08")));
        assert!(occurs_on(&event, day("2024-01-15")));
        assert!(!occurs_on(&event, day("2024-01-09")));
    }

    #[test]
    fn weekly_interval_skips_off_weeks() {
        let event = recurring(
            "2024-01-01",
            RecurrencePattern::every(RecurrenceKind::Weekly, 2),
        );

        assert!(occurs_on(&event, day("2024-01-01")));
        assert!(!occurs_on(&event, day("2024-01-08")));
        assert!(occurs_on(&event, day("2024-01-15")));
    }

    #[test]
    fn monthly_matches_same_day_of_month() {
        let event = recurring(
            "2024-01-15",
            RecurrencePattern::every(RecurrenceKind::Monthly, 1),
        );

        assert!(occurs_on(&event, day("2024-02-15")));
        assert!(occurs_on(&event, day("2024-12-15")));
        assert!(!occurs_on(&event, day("2024-02-14")));
    }

    #[test]
    fn monthly_respects_interval() {
        let event = recurring(
            "2024-01-15",
            RecurrencePattern::every(RecurrenceKind::Monthly, 3),
        );

        assert!(occurs_on(&event, day("2024-04-15")));
        assert!(!occurs_on(&event, day("2024-02-15")));
        assert!(!occurs_on(&event, day("2024-03-15")));
    }

    #[test]
    fn monthly_interval_across_year_boundary() {
        let event = recurring(
            "2024-11-05",
            RecurrencePattern::every(RecurrenceKind::Monthly, 2),
        );

        assert!(occurs_on(&event, day("2025-01-05")));
        assert!(!occurs_on(&event, day("2024-12-05")));
    }

    #[test]
    fn monthly_on_the_31st_skips_short_months() {
        // Anchored on the 31st there is simply no occurrence in February
        // or April; the series does not shift to the last day instead.
        let event = recurring(
            "2024-01-31",
            RecurrencePattern::every(RecurrenceKind::Monthly, 1),
        );

        let feb_hits = day("2024-02-01")
            .iter_days()
            .take(29)
            .filter(|d| occurs_on(&event, *d))
            .count();
        assert_eq!(feb_hits, 0);

        let apr_hits = day("2024-04-01")
            .iter_days()
            .take(30)
            .filter(|d| occurs_on(&event, *d))
            .count();
        assert_eq!(apr_hits, 0);

        assert!(occurs_on(&event, day("2024-03-31")));
    }

    #[test]
    fn custom_patterns_never_match() {
        let event = recurring(
            "2024-01-01",
            RecurrencePattern::every(RecurrenceKind::Custom, 1),
        );

        assert!(!occurs_on(&event, day("2024-01-01")));
        assert!(!occurs_on(&event, day("2024-01-02")));
    }

    #[test]
    fn count_is_carried_but_not_consulted() {
        // A declared occurrence cap does not stop the series; only the end
        // date does.
        let mut pattern = RecurrencePattern::every(RecurrenceKind::Daily, 1);
        pattern.count = Some(2);
        let event = recurring("2024-01-01", pattern);

        assert!(occurs_on(&event, day("2024-01-10")));
    }
}
