use std::env;
use std::fs;

use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

use meetsync_schedule::grid::print::ItineraryRow;
use meetsync_schedule::grid::{Cell, GridRow, ScheduleGrid};
use meetsync_schedule::view::{
    load_event_grid, load_judge_grid, load_resource_grid, load_results, load_school_itinerary,
};
use meetsync_schedule::{CompetitionSnapshot, EntityFilter, EventResults, ScheduleConfig, StaticSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let log_level = match env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()).as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ScheduleConfig::from_env()?;

    // The snapshot file stands in for the portal's persistence service:
    // a fully materialized dump of one competition's data.
    let snapshot_path = env::args()
        .nth(1)
        .or_else(|| env::var("MEETSYNC_SNAPSHOT").ok())
        .ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Usage: meetsync <snapshot.json> (or set MEETSYNC_SNAPSHOT)"
            )
        })?;
    let snapshot: CompetitionSnapshot = serde_json::from_str(
        &fs::read_to_string(&snapshot_path)
            .wrap_err_with(|| format!("Failed to read snapshot {snapshot_path}"))?,
    )
    .wrap_err("Failed to parse snapshot")?;
    info!(path = %snapshot_path, "loaded competition snapshot");

    let source = StaticSource::new(snapshot);
    let competition_id = match env::var("MEETSYNC_COMPETITION_ID") {
        Ok(id) => id.parse().wrap_err("Invalid MEETSYNC_COMPETITION_ID")?,
        Err(_) => Uuid::nil(),
    };

    let events = load_event_grid(&source, competition_id, &config, &EntityFilter::All).await?;
    print_grid("Event Schedule", &events);

    let judges = load_judge_grid(&source, competition_id, &config, &EntityFilter::All).await?;
    print_grid("Judge Schedule", &judges);

    let resources = load_resource_grid(&source, competition_id, &config, &EntityFilter::All).await?;
    print_grid("Resource Schedule", &resources);

    if let Ok(school_id) = env::var("MEETSYNC_SCHOOL") {
        let school_id: Uuid = school_id.parse().wrap_err("Invalid MEETSYNC_SCHOOL")?;
        let itinerary = load_school_itinerary(&source, competition_id, school_id, &config).await?;
        print_itinerary(&itinerary);
    }

    let results = load_results(&source, competition_id).await?;
    print_results(&results);

    Ok(())
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Inactive => String::new(),
        Cell::LunchBreak => "LUNCH".to_string(),
        Cell::Unassigned => "-".to_string(),
        Cell::Occupied { labels, .. } => labels.join(", "),
    }
}

fn print_grid(title: &str, grid: &ScheduleGrid) {
    println!("\n=== {title} ===");
    if grid.is_empty() {
        println!("No assignments found.");
        return;
    }

    // Column widths: headers vs widest cell in each column.
    let mut widths: Vec<usize> = grid.columns.iter().map(|c| c.label.len()).collect();
    for row in grid.slot_rows() {
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i] = widths[i].max(cell_text(cell).len());
        }
    }

    let header: Vec<String> = grid
        .columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| format!("{:width$}", column.label))
        .collect();
    println!("{:5}  {}", "Time", header.join("  "));

    for row in &grid.rows {
        match row {
            GridRow::DayHeader { label, .. } => println!("--- {label} ---"),
            GridRow::Slots(slot_row) => {
                let cells: Vec<String> = slot_row
                    .cells
                    .iter()
                    .zip(&widths)
                    .map(|(cell, &width)| format!("{:width$}", cell_text(cell)))
                    .collect();
                println!("{:5}  {}", slot_row.label, cells.join("  "));
            }
        }
    }
}

fn print_itinerary(rows: &[ItineraryRow]) {
    println!("\n=== School Itinerary ===");
    if rows.is_empty() {
        println!("No events found for this school.");
        return;
    }

    let mut current_date = None;
    for row in rows {
        if current_date != Some(row.date) {
            println!("--- {} ---", row.date_label);
            current_date = Some(row.date);
        }
        match &row.location {
            Some(location) => println!("{}  {}  ({location})", row.time, row.event),
            None => println!("{}  {}", row.time, row.event),
        }
    }
}

fn print_results(results: &[EventResults]) {
    println!("\n=== Results ===");
    if results.is_empty() {
        println!("No score sheets found.");
        return;
    }

    for event in results {
        println!("\n{}", event.event_type);
        let judges: Vec<String> = event
            .judge_numbers
            .iter()
            .map(|judge| format!("J{judge:<6}"))
            .collect();
        println!("{:4} {:24} {:8} {}", "Rank", "School", "Total", judges.join(" "));
        for standing in &event.standings {
            let cells: Vec<String> = standing
                .by_judge
                .iter()
                .map(|score| match score {
                    Some(score) => format!("{score:<7}"),
                    None => format!("{:<7}", "-"),
                })
                .collect();
            println!(
                "{:<4} {:24} {:<8} {}",
                standing.rank,
                standing.school,
                standing.total,
                cells.join(" ")
            );
        }
    }
}
