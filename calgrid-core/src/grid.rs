//! Month-grid materialization.
//!
//! Produces the ordered grid of day cells shown for one month: whole weeks
//! from the week containing the 1st through the week containing the last
//! day, with spill-over days from the adjacent months.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::event::Event;
use crate::recurrence;

/// Week layout used when none is configured.
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

/// One calendar-date slot in the month grid.
///
/// Cells are ephemeral view projections: recomputed on every build, never
/// stored.
#[derive(Debug, Clone)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Whether this cell belongs to the reference month, as opposed to the
    /// leading/trailing spill-over.
    pub in_reference_month: bool,
    pub is_today: bool,
    /// Events occurring on this date, in event-set order.
    pub events: Vec<Event>,
}

/// Build the grid of day cells for the month containing `reference`.
///
/// `today` is threaded explicitly so callers (and tests) control the
/// clock. The grid always spans whole weeks starting on `week_start`, so
/// its length is a multiple of seven.
///
/// An event lands on a cell if it starts on that calendar date, or if its
/// recurrence pattern puts it there. Within a cell, events keep the order
/// of the input set.
pub fn build_month(
    reference: NaiveDate,
    today: NaiveDate,
    events: &[Event],
    week_start: Weekday,
) -> Vec<DayCell> {
    let month_first = first_of_month(reference);
    let month_last = last_of_month(reference);

    let grid_first = week_floor(month_first, week_start);
    let grid_last = week_floor(month_last, week_start) + Days::new(6);

    grid_first
        .iter_days()
        .take_while(|day| *day <= grid_last)
        .map(|day| DayCell {
            date: day,
            in_reference_month: day.month() == reference.month()
                && day.year() == reference.year(),
            is_today: day == today,
            events: events
                .iter()
                .filter(|event| falls_on(event, day))
                .cloned()
                .collect(),
        })
        .collect()
}

/// First day of the month after `date`'s.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) + Months::new(1)
}

/// First day of the month before `date`'s.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) - Months::new(1)
}

/// An event falls on a day if it starts that day, or its recurrence puts
/// it there.
fn falls_on(event: &Event, day: NaiveDate) -> bool {
    if event.start_date() == day {
        return true;
    }
    event.recurrence.is_some() && recurrence::occurs_on(event, day)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("every month has a first day")
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) + Months::new(1) - Days::new(1)
}

/// Walk back from `date` to the most recent `week_start` day (possibly
/// `date` itself).
fn week_floor(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (7 + date.weekday().num_days_from_sunday()
        - week_start.num_days_from_sunday())
        % 7;
    date - Days::new(u64::from(offset))
}
