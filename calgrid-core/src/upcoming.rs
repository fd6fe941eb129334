//! Next-occurrence projection for recurring events.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::event::{Event, RecurrenceKind};

/// Project the next occurrence of a recurring event, strictly after
/// `today`.
///
/// Non-recurring events have no projection and return `None`. A series
/// whose first occurrence is still pending returns its start date as-is.
/// When today itself qualifies, the projection advances to the following
/// qualifying date rather than returning today.
pub fn next_occurrence(event: &Event, today: NaiveDate) -> Option<NaiveDate> {
    let pattern = event.recurrence.as_ref()?;
    let start = event.start_date();

    if start > today {
        return Some(start);
    }

    let interval = i64::from(pattern.interval);

    match pattern.kind {
        RecurrenceKind::Daily => {
            let since = (today - start).num_days();
            let rem = since % interval;
            let ahead = if rem == 0 { interval } else { interval - rem };
            today.checked_add_days(Days::new(ahead as u64))
        }
        RecurrenceKind::Weekly => {
            let today_dow = i64::from(today.weekday().num_days_from_sunday());

            // Projection steps to the nearest matching weekday; the week
            // interval is not consulted in this branch.
            let ahead = if pattern.days_of_week.is_empty() {
                let start_dow = i64::from(start.weekday().num_days_from_sunday());
                match (start_dow + 7 - today_dow) % 7 {
                    0 => 7,
                    n => n,
                }
            } else {
                let mut days: Vec<i64> =
                    pattern.days_of_week.iter().map(|d| i64::from(*d)).collect();
                days.sort_unstable();
                match days.iter().find(|d| **d > today_dow) {
                    Some(next) => next - today_dow,
                    None => 7 - today_dow + days[0],
                }
            };
            today.checked_add_days(Days::new(ahead as u64))
        }
        RecurrenceKind::Monthly => {
            // Always steps by a single month, whatever the interval says.
            // A target day that does not exist in the target month (the
            // 31st in February) yields no occurrence.
            let anchor = start.day();
            let base = if today.day() < anchor {
                today
            } else {
                today.checked_add_months(Months::new(1))?
            };
            NaiveDate::from_ymd_opt(base.year(), base.month(), anchor)
        }
        RecurrenceKind::Custom => None,
    }
}
