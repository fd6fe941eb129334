//! Edit an existing event.

use anyhow::Result;
use calgrid_core::dates;
use calgrid_core::event::EventPatch;
use calgrid_core::store::EventStore;
use chrono::Utc;
use clap::Args;

use crate::render;

#[derive(Args)]
pub struct EditArgs {
    /// Event id (or unique prefix)
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    /// New start date/time
    #[arg(long)]
    pub start: Option<String>,

    /// New end date/time
    #[arg(long)]
    pub end: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Palette color token
    #[arg(long)]
    pub color: Option<String>,

    /// Repeat: daily, weekly, monthly or custom
    #[arg(long)]
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

    /// Remove the recurrence pattern
    #[arg(long, conflicts_with = "repeat")]
    pub no_repeat: bool,
}

pub fn run(store: &mut impl EventStore, args: EditArgs) -> Result<()> {
    let events = store.load_all();
    let event = super::find_event(&events, &args.id)?;

    if let Some(color) = &args.color {
        super::check_color(color)?;
    }

    let recurrence = if args.no_repeat {
        Some(None)
    } else {
        super::recurrence_from_flags(
            args.repeat.as_deref(),
            args.every,
            args.on.as_deref(),
            args.until.as_deref(),
        )?
        .map(Some)
    };

    let patch = EventPatch {
        title: args.title,
        start: args.start.as_deref().map(dates::parse_datetime).transpose()?,
        end: args.end.as_deref().map(dates::parse_datetime).transpose()?,
        description: args.description,
        color: args.color,
        recurrence,
    };

    let updated = event.apply(patch, Utc::now());
    store.update(&updated);

    println!("Updated '{}' ({})", updated.title, render::short_id(&updated));
    Ok(())
}
