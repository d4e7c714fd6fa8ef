// File: crates/demo/src/main.rs
// Summary: Demo loads raw (x, y) rows from CSV and prints the mapped sheet,
// tick labels, and round-trip report.

use anyhow::{Context, Result};
use sheet_core::ticks::tick_positions;
use sheet_core::{RawPoint, RowStatus, SheetChart, SheetConfig};
use std::path::Path;

fn main() -> Result<()> {
    let rows = match std::env::args().nth(1) {
        Some(path) => {
            let rows = load_rows_csv(Path::new(&path))
                .with_context(|| format!("failed to load CSV '{}'", path))?;
            println!("Loaded {} rows from {}", rows.len(), path);
            rows
        }
        None => {
            println!("No CSV given; using built-in sample rows");
            sample_rows()
        }
    };

    let config = SheetConfig::default();
    config.validate().context("invalid sheet configuration")?;

    let chart = SheetChart::with_rows(config, rows);

    let ranges = chart.ranges();
    println!(
        "Ranges: x [{}, {}], y [{}, {}]",
        ranges.min_x, ranges.max_x, ranges.min_y, ranges.max_y
    );

    let units = chart.units_per_mm();
    println!("Scale: 1mm -> {} x units, {} y units", units.x, units.y);
    let (tick0_x, tick0_y) = chart.tick_at_zero();
    println!("Tick at 0mm: x {}, y {}", tick0_x, tick0_y);

    let mapping = chart.mapping();
    println!(
        "Mapped {} points onto a {}mm x {}mm sheet:",
        mapping.points.len(),
        config.sheet.x,
        config.sheet.y
    );
    for p in &mapping.points {
        println!(
            "  ({}, {}) -> ({:.2}mm, {:.2}mm)",
            p.original_x, p.original_y, p.x, p.y
        );
    }
    for line in &mapping.axis_lines {
        println!("  {}", line.label);
    }

    let x_axis = chart.x_axis();
    println!("X axis '{}' labels every {}mm:", x_axis.title, x_axis.tick_step);
    for mm in tick_positions(x_axis.max, x_axis.tick_step) {
        println!("  {}", (x_axis.formatter)(mm));
    }

    let report = chart.validation();
    println!(
        "Round trip ({} valid of {} rows): {} / {}",
        report.valid_rows, report.total_rows, report.scale_x, report.scale_y
    );
    for row in &report.rows {
        let status = match row.status {
            RowStatus::Match => "ok",
            RowStatus::Mismatch => "MISMATCH",
            RowStatus::Incomplete => "-",
        };
        println!("  #{} {}", row.index + 1, status);
    }

    Ok(())
}

/// Read raw rows from a two-column CSV (x, y), keeping empty fields so
/// the sanitizer can exercise its exclusion rules.
fn load_rows_csv(path: &Path) -> Result<Vec<RawPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let x = rec.get(0).unwrap_or("").to_string();
        let y = rec.get(1).unwrap_or("").to_string();
        rows.push(RawPoint { x, y });
    }
    Ok(rows)
}

fn sample_rows() -> Vec<RawPoint> {
    vec![
        RawPoint::new("-3", "2"),
        RawPoint::new("0", "0"),
        RawPoint::new("100", "200"),
        RawPoint::new("47.5", "120"),
        RawPoint::new("", "5"),     // still being edited
        RawPoint::new("oops", "1"), // non-numeric
    ]
}
