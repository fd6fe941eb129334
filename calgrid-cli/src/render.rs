//! Terminal rendering for calgrid output.
//!
//! Turns core types into colored strings with owo_colors; no calendar
//! logic lives here.

use calgrid_core::event::{self, Event, RecurrenceKind, RecurrencePattern};
use calgrid_core::grid::DayCell;
use chrono::{Datelike, NaiveDate, Weekday};
use owo_colors::OwoColorize;

const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Render the month header, weekday row, day grid and occurrence list.
pub fn month(reference: NaiveDate, cells: &[DayCell], week_start: Weekday) -> String {
    let mut lines = Vec::new();

    let title = format!("{:^27}", reference.format("%B %Y").to_string());
    lines.push(title.bold().to_string());
    lines.push(weekday_row(week_start));

    for week in cells.chunks(7) {
        let row: Vec<String> = week.iter().map(cell).collect();
        lines.push(row.join(" "));
    }

    let mut listing = Vec::new();
    for c in cells
        .iter()
        .filter(|c| c.in_reference_month && !c.events.is_empty())
    {
        for e in &c.events {
            listing.push(format!(
                "  {} {}",
                c.date.format("%d %a"),
                paint(&e.color, &e.title)
            ));
        }
    }
    if !listing.is_empty() {
        lines.push(String::new());
        lines.extend(listing);
    }

    lines.join("\n") + "\n"
}

/// One agenda entry: id, date, title and relative distance.
pub fn agenda_line(date: NaiveDate, event: &Event, today: NaiveDate) -> String {
    let days = (date - today).num_days().max(0) as u64;
    let distance = if days == 0 {
        "today".to_string()
    } else {
        let span = std::time::Duration::from_secs(days * 86_400);
        format!("in {}", humantime::format_duration(span))
    };

    format!(
        "{}  {}  {} {}",
        short_id(event),
        date.format("%Y-%m-%d %a"),
        paint(&event.color, &event.title),
        format!("({distance})").dimmed()
    )
}

/// One search-result line: id, start, title and recurrence tag.
pub fn event_line(event: &Event) -> String {
    let recur = match &event.recurrence {
        Some(pattern) => format!(" {}", recurrence_tag(pattern).dimmed()),
        None => String::new(),
    };

    format!(
        "{}  {}  {}{}",
        short_id(event),
        event.start.format("%Y-%m-%d %H:%M"),
        paint(&event.color, &event.title),
        recur
    )
}

/// First id segment, enough to address an event on the command line.
pub fn short_id(event: &Event) -> String {
    event.id.split('-').next().unwrap_or(&event.id).to_string()
}

/// Color `text` with an event's palette color, falling back to plain text
/// for unknown tokens.
pub fn paint(color_id: &str, text: &str) -> String {
    match event::color_by_id(color_id).and_then(|c| hex_rgb(c.hex)) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}

fn weekday_row(week_start: Weekday) -> String {
    let first = week_start.num_days_from_sunday() as usize;
    (0..7)
        .map(|i| format!("{} ", WEEKDAY_LABELS[(first + i) % 7]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Three columns per day: two for the number, one for the event marker.
fn cell(c: &DayCell) -> String {
    let num = format!("{:>2}", c.date.day());
    let num = if c.is_today {
        num.reversed().to_string()
    } else if !c.in_reference_month {
        num.dimmed().to_string()
    } else {
        num
    };

    let marker = match c.events.first() {
        Some(event) => paint(&event.color, "*"),
        None => " ".to_string(),
    };

    format!("{num}{marker}")
}

fn recurrence_tag(pattern: &RecurrencePattern) -> String {
    let unit = match pattern.kind {
        RecurrenceKind::Daily => "day",
        RecurrenceKind::Weekly => "week",
        RecurrenceKind::Monthly => "month",
        RecurrenceKind::Custom => return "(custom)".to_string(),
    };

    if pattern.interval == 1 {
        format!("(every {unit})")
    } else {
        format!("(every {} {unit}s)", pattern.interval)
    }
}

fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
