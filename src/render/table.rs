//! Terminal tables

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::model::PlantStatus;
use crate::views::details::NO_READINGS_MESSAGE;
use crate::views::format::{format_absolute, format_percent};
use crate::views::{DashboardView, PlantDetails, StatusSummary};

/// Summary cards as one line per status
pub fn summary(summary: &StatusSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<14} {}", "Total", summary.total);
    for status in PlantStatus::all() {
        let _ = writeln!(out, "{:<14} {}", status.label(), summary.count(*status));
    }
    out
}

/// Summary followed by the filtered plant table
pub fn dashboard(view: &DashboardView, now: DateTime<Utc>) -> String {
    let mut out = summary(&view.summary());
    out.push('\n');

    let rows = view.rows(now);
    if view.plants().is_empty() {
        out.push_str("No plants yet.\n");
        return out;
    }
    if rows.is_empty() {
        out.push_str("No plants match the current filter.\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<6} {:<20} {:<20} {:<12} {:<16} {}",
        "ID", "Name", "Species", "Ideal", "Last Reading", "Status"
    );
    let _ = writeln!(out, "{}", "-".repeat(90));
    for row in rows {
        let _ = writeln!(
            out,
            "{:<6} {:<20} {:<20} {:<12} {:<16} {}",
            row.id,
            truncate(&row.name, 20),
            truncate(&row.species, 20),
            row.ideal_range,
            row.last_reading,
            row.status.label()
        );
    }
    out
}

/// Details card followed by the reading history
pub fn details(details: &PlantDetails, now: DateTime<Utc>) -> String {
    let plant = details.plant();
    let mut out = String::new();

    let _ = writeln!(out, "{}", plant.name);
    let _ = writeln!(out, "{}", details.species_label());
    out.push('\n');
    let _ = writeln!(out, "  {:<16} {}", "Status", details.status().label());
    let _ = writeln!(out, "  {:<16} {}", "Ideal range", details.ideal_range_label());
    let _ = writeln!(out, "  {:<16} {}", "Last moisture", details.last_moisture_label());
    let _ = writeln!(out, "  {:<16} {}", "Last reading at", details.last_reading_time());
    let _ = writeln!(out, "  {}", details.last_reading_short(now));
    out.push('\n');
    out.push_str(&history(details));
    out
}

/// Reading history table, newest first
pub fn history(details: &PlantDetails) -> String {
    let rows = details.history();
    if rows.is_empty() {
        return format!("{}\n", NO_READINGS_MESSAGE);
    }

    let mut out = String::new();
    let _ = writeln!(out, "{:<26} {:<10} {}", "Time", "Moisture", "Status");
    let _ = writeln!(out, "{}", "-".repeat(50));
    for row in rows {
        let _ = writeln!(
            out,
            "{:<26} {:<10} {}",
            format_absolute(Some(row.timestamp)),
            format_percent(row.moisture_percent),
            row.status.label()
        );
    }
    out
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
