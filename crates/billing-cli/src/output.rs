//! Output formatting module

use billing_app::session::{BillingSession, Outcome, SUMMARY_LABELS};
use billing_domain::model::TripRecord;
use billing_types::{format_currency, OutputFormat, Result, Summary, COLUMN_HEADERS};
use serde::Serialize;

#[derive(Serialize)]
struct SummaryReport<'a> {
    trips: &'a [TripRecord],
    summary: Summary,
}

pub fn output_summary(output_format: OutputFormat, session: &BillingSession) -> Result<()> {
    let trips = session.ledger().snapshot();
    let summary = session.summary().unwrap_or_default();

    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&SummaryReport { trips, summary })?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nTrips");
    println!("=====");
    if trips.is_empty() {
        println!("(no trips)");
    } else {
        print!("{}", render_trip_table(trips));
    }

    let symbol = &session.config().currency_symbol;
    let values = [
        summary.go_total,
        summary.return_total,
        summary.grand_total,
        summary.profit,
    ];
    println!("\nSummary");
    println!("=======");
    for (label, value) in SUMMARY_LABELS.iter().zip(values) {
        println!("{:<19}{}", label, format_currency(symbol, value));
    }

    Ok(())
}

pub fn output_exports(output_format: OutputFormat, outcomes: &[Outcome]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let paths: Vec<_> = outcomes
            .iter()
            .filter_map(|o| match o {
                Outcome::Exported { kind, path } => Some(serde_json::json!({
                    "kind": kind.label(),
                    "path": path.display().to_string(),
                })),
                Outcome::EntryAdded { .. } => None,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        for notice in outcomes.iter().filter_map(Outcome::notice) {
            println!("{}", notice);
        }
    }
    Ok(())
}

/// Left-aligned columns sized to their widest cell
fn render_trip_table(trips: &[TripRecord]) -> String {
    let rows: Vec<[String; 10]> = trips.iter().map(TripRecord::display_cells).collect();

    let mut widths = COLUMN_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = format_line(&COLUMN_HEADERS, &widths);
    let total_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(total_width));
    out.push('\n');
    for row in &rows {
        let cells = row.each_ref().map(String::as_str);
        out.push_str(&format_line(&cells, &widths));
    }
    out
}

fn format_line(cells: &[&str; 10], widths: &[usize; 10]) -> String {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    format!("{}\n", line.join("  ").trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use billing_domain::model::TripForm;

    #[test]
    fn test_render_trip_table() {
        let record = TripForm {
            date: "01-01-2024".to_string(),
            driver: "A".to_string(),
            weight_kg: "10000".to_string(),
            rate_per_tonne: "2000".to_string(),
            ..Default::default()
        }
        .to_record()
        .unwrap();

        let table = render_trip_table(&[record]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Date        Trip Type"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].ends_with("20000.0"));
    }
}
