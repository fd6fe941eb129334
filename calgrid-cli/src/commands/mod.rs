//! CLI subcommands.

pub mod agenda;
pub mod delete;
pub mod edit;
pub mod month;
pub mod new;
pub mod reschedule;
pub mod search;

use anyhow::{Result, bail};
use calgrid_core::dates;
use calgrid_core::event::{Event, PALETTE, RecurrenceKind, RecurrencePattern, color_by_id};

/// Find a stored event by full id or unique id prefix.
pub fn find_event(events: &[Event], id: &str) -> Result<Event> {
    if let Some(event) = events.iter().find(|e| e.id == id) {
        return Ok(event.clone());
    }

    let matches: Vec<&Event> = events.iter().filter(|e| e.id.starts_with(id)).collect();
    match matches.len() {
        1 => Ok(matches[0].clone()),
        0 => bail!("No event with id '{id}'"),
        n => bail!("Id prefix '{id}' is ambiguous ({n} matches)"),
    }
}

/// Build a recurrence pattern from the repeat flags, if any were given.
pub fn recurrence_from_flags(
    repeat: Option<&str>,
    every: u32,
    on: Option<&str>,
    until: Option<&str>,
) -> Result<Option<RecurrencePattern>> {
    let Some(repeat) = repeat else {
        if on.is_some() || until.is_some() {
            bail!("--on and --until require --repeat");
        }
        return Ok(None);
    };

    let kind = match repeat {
        "daily" => RecurrenceKind::Daily,
        "weekly" => RecurrenceKind::Weekly,
        "monthly" => RecurrenceKind::Monthly,
        "custom" => RecurrenceKind::Custom,
        other => bail!("Unknown repeat '{other}'. Expected daily, weekly, monthly or custom"),
    };

    let mut pattern = RecurrencePattern::every(kind, every);
    if let Some(on) = on {
        pattern = pattern.on_days(parse_days(on)?);
    }
    if let Some(until) = until {
        pattern = pattern.until(dates::parse_date(until)?);
    }
    Ok(Some(pattern))
}

/// Parse a comma-separated weekday list like "mon,wed".
fn parse_days(s: &str) -> Result<Vec<u8>> {
    s.split(',')
        .map(|part| dates::parse_weekday(part).map_err(anyhow::Error::from))
        .collect()
}

/// Validate a palette token before it lands in an event.
pub fn check_color(color: &str) -> Result<()> {
    if color_by_id(color).is_none() {
        let known: Vec<&str> = PALETTE.iter().map(|c| c.id).collect();
        bail!("Unknown color '{color}'. Available: {}", known.join(", "));
    }
    Ok(())
}
