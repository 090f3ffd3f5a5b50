// Venue Timetable
// Command-line entry point: lays out one day of a venue timetable

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use serde::Serialize;

use venue_timetable::models::event::Event;
use venue_timetable::models::settings::GridConfig;
use venue_timetable::services::dataset::Dataset;
use venue_timetable::services::layout::TimetableLayout;
use venue_timetable::services::schedule::{DayTab, DaySelection};
use venue_timetable::utils::date::parse_date_string;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "venue-timetable", about = "Lay out a day of venue bookings on a time grid")]
struct Cli {
    /// Grid config (TOML). Defaults to the per-user grid.toml, then built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Venues and events (JSON). Uses the built-in sample when omitted
    #[arg(long)]
    data: Option<PathBuf>,

    /// Day to show, YYYY-MM-DD. Defaults to today
    #[arg(long)]
    date: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    tabs: &'a [DayTab],
    selected: usize,
    grid: &'a GridConfig,
    layout: &'a TimetableLayout,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!("Starting venue timetable");

    let today = Local::now().date_naive();
    let date = match cli.date.as_deref() {
        Some(text) => parse_date_string(text)
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", text))?,
        None => today,
    };

    let grid = GridConfig::load_or_default(cli.config.as_deref())?;
    let dataset = match cli.data.as_deref() {
        Some(path) => Dataset::load(path)?,
        None => Dataset::sample(date),
    };

    // Show the current week when the date falls inside it
    let mut selection = DaySelection::new(today);
    if !selection.contains(date) {
        selection = DaySelection::new(date);
    }
    selection.select_date(date);

    let events: Vec<Event> = selection
        .events_for_selected(&dataset.events)
        .into_iter()
        .cloned()
        .collect();
    let layout = TimetableLayout::build(&dataset.venues, &events, &grid)
        .with_context(|| format!("Failed to lay out timetable for {}", date))?;

    match cli.format {
        OutputFormat::Json => {
            let report = JsonReport {
                tabs: selection.tabs(),
                selected: selection.selected_index(),
                grid: &grid,
                layout: &layout,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => print_text(&selection, &events, &layout),
    }

    Ok(())
}

fn print_text(selection: &DaySelection, events: &[Event], layout: &TimetableLayout) {
    let tabs: Vec<String> = selection
        .tabs()
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            if index == selection.selected_index() {
                format!("[{} {}]", tab.day_name, tab.date_string)
            } else {
                format!(" {} {} ", tab.day_name, tab.date_string)
            }
        })
        .collect();
    println!("{}", tabs.join(" "));

    let venue_names: Vec<&str> = layout.venues().iter().map(|v| v.name.as_str()).collect();
    println!(
        "Venues: {} (table width {}px)",
        venue_names.join(" | "),
        layout.table_width_px()
    );

    if layout.anchor_count() == 0 {
        println!("No events to show.");
    }

    for row in layout.rows() {
        for cell in &row.cells {
            for placement in &cell.placements {
                let Some(event) = events.iter().find(|event| event.id == placement.event_id) else {
                    continue;
                };
                println!(
                    "{}  {:<20} {}  venues {:?}  {}x{}px at ({}, {})  {} (hover {})",
                    row.time,
                    event.name,
                    event.time_range_label(),
                    placement.spanned_venue_ids,
                    placement.width_px,
                    placement.height_px,
                    placement.left_px,
                    placement.top_px,
                    placement.color,
                    placement.hover_color
                );
            }
        }
    }

    for event_id in layout.skipped_event_ids() {
        println!("Skipped event {}: not drawn on this grid", event_id);
    }
}
