// File: crates/sheet-core/src/validate.rs
// Summary: Round-trip validator composing the forward and inverse maps per row.

use crate::format::format_scientific;
use crate::points::RawPoint;
use crate::range::Ranges;
use crate::scale::UnitsPerMm;
use crate::types::SqueezeMargins;

/// Absolute tolerance for a row to count as matching.
pub const MATCH_TOLERANCE: f64 = 1e-4;

/// Outcome for one table row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowStatus {
    /// Both reverse-computed values are within tolerance of the input.
    Match,
    /// At least one axis diverged beyond tolerance.
    Mismatch,
    /// The row has a missing or non-numeric field.
    Incomplete,
}

/// One row's reverse computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowCheck {
    pub index: usize,
    pub reverse_x: Option<f64>,
    pub reverse_y: Option<f64>,
    pub status: RowStatus,
}

/// Full report for the validation panel.
#[derive(Clone, Debug)]
pub struct ValidationReport {
    pub rows: Vec<RowCheck>,
    /// "1mm → <units> units" per axis.
    pub scale_x: String,
    pub scale_y: String,
    /// Data value at millimetre position 0, per axis.
    pub tick_at_zero: (f64, f64),
    pub valid_rows: usize,
    pub total_rows: usize,
}

/// Exercise the forward map (span form) and the inverse map
/// (units-per-mm form) on every row. A divergence between the two
/// formulations surfaces here as a `Mismatch`, never as an error.
pub fn round_trip_report(
    rows: &[RawPoint],
    ranges: &Ranges,
    squeeze: SqueezeMargins,
    units: UnitsPerMm,
    tick_at_zero: (f64, f64),
) -> ValidationReport {
    let mut checks = Vec::with_capacity(rows.len());
    let mut valid_rows = 0usize;

    for (index, row) in rows.iter().enumerate() {
        let check = match row.parse() {
            Some(p) => {
                valid_rows += 1;
                // Forward to mm, then back through the inverse.
                let mm_x = (p.x - ranges.min_x) / units.x + squeeze.x;
                let mm_y = (p.y - ranges.min_y) / units.y + squeeze.y;
                let rev_x = mm_x * units.x + tick_at_zero.0;
                let rev_y = mm_y * units.y + tick_at_zero.1;
                let matched = (rev_x - p.x).abs() < MATCH_TOLERANCE
                    && (rev_y - p.y).abs() < MATCH_TOLERANCE;
                RowCheck {
                    index,
                    reverse_x: Some(rev_x),
                    reverse_y: Some(rev_y),
                    status: if matched {
                        RowStatus::Match
                    } else {
                        RowStatus::Mismatch
                    },
                }
            }
            None => RowCheck {
                index,
                reverse_x: None,
                reverse_y: None,
                status: RowStatus::Incomplete,
            },
        };
        checks.push(check);
    }

    ValidationReport {
        rows: checks,
        scale_x: format!("1mm → {} units", format_scientific(units.x)),
        scale_y: format!("1mm → {} units", format_scientific(units.y)),
        tick_at_zero,
        valid_rows,
        total_rows: rows.len(),
    }
}
