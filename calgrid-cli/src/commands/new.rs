//! Create a new event.

use anyhow::Result;
use calgrid_core::event::{Event, EventDraft};
use calgrid_core::store::EventStore;
use calgrid_core::{conflict, dates};
use chrono::Utc;
use clap::Args;

use crate::render;

#[derive(Args)]
pub struct NewArgs {
    /// Event title
    pub title: String,

    /// Start date/time ("2025-03-20T15:00" or "2025-03-20")
    #[arg(short, long)]
    pub start: String,

    /// End date/time
    #[arg(short, long)]
    pub end: Option<String>,

    /// Longer description, searched alongside the title
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Palette color token
    #[arg(short, long, default_value = "blue")]
    pub color: String,

    /// Repeat: daily, weekly, monthly or custom
    #[arg(short, long)]
    pub repeat: Option<String>,

    /// Repeat every N days/weeks/months
    #[arg(long, default_value_t = 1)]
    pub every: u32,

    /// Weekdays for weekly repeats, e.g. "mon,wed"
    #[arg(long)]
    pub on: Option<String>,

    /// Last date of the series (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub until: Option<String>,
}

pub fn run(store: &mut impl EventStore, args: NewArgs) -> Result<()> {
    super::check_color(&args.color)?;

    let start = dates::parse_datetime(&args.start)?;
    let end = args.end.as_deref().map(dates::parse_datetime).transpose()?;
    let recurrence = super::recurrence_from_flags(
        args.repeat.as_deref(),
        args.every,
        args.on.as_deref(),
        args.until.as_deref(),
    )?;

    let event = Event::create(
        EventDraft {
            title: args.title,
            start,
            end,
            description: args.description,
            color: args.color,
            recurrence,
        },
        Utc::now(),
    );

    let existing = store.load_all();
    let clashes: Vec<String> = existing
        .iter()
        .filter(|e| conflict::same_day(e, &event))
        .map(|e| e.title.clone())
        .collect();

    store.add(event.clone());
    println!("Created '{}' ({})", event.title, render::short_id(&event));

    for title in clashes {
        println!(
            "  note: shares {} with '{title}'",
            event.start_date().format("%Y-%m-%d")
        );
    }
    Ok(())
}
