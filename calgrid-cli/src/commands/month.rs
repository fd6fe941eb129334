//! Render the month grid.

use anyhow::Result;
use calgrid_core::dates;
use calgrid_core::grid::{self, DEFAULT_WEEK_START};
use calgrid_core::store::EventStore;
use chrono::{Local, Weekday};

use crate::render;

pub fn run(
    store: &impl EventStore,
    month: Option<&str>,
    offset: i32,
    monday: bool,
) -> Result<()> {
    let today = Local::now().date_naive();

    let mut reference = match month {
        Some(s) => dates::parse_month(s)?,
        None => today,
    };

    for _ in 0..offset.unsigned_abs() {
        reference = if offset > 0 {
            grid::next_month(reference)
        } else {
            grid::previous_month(reference)
        };
    }

    let week_start = if monday { Weekday::Mon } else { DEFAULT_WEEK_START };
    let cells = grid::build_month(reference, today, &store.load_all(), week_start);

    print!("{}", render::month(reference, &cells, week_start));
    Ok(())
}
