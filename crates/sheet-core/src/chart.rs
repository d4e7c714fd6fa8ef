// File: crates/sheet-core/src/chart.rs
// Summary: Composition root: raw rows plus configuration, recomputed into
// render, tick, and validation products on demand.

use crate::axis::{x_axis_config, y_axis_config, AxisConfig};
use crate::config::SheetConfig;
use crate::mapping::{map_to_sheet, SheetMapping};
use crate::points::{sanitize, DataPoint, RawPoint};
use crate::range::Ranges;
use crate::scale::{AxisScale, UnitsPerMm};
use crate::types::{SheetSize, SqueezeMargins};
use crate::validate::{round_trip_report, ValidationReport};

/// Summary handed to the persistence collaborator: counts and geometry,
/// never the transform state itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetSummary {
    pub valid_points: usize,
    pub total_rows: usize,
    pub sheet: SheetSize,
    pub squeeze: SqueezeMargins,
}

/// The live sheet model. Owns the raw rows and configuration; every
/// derived artifact is recomputed from current inputs on each call, so
/// a superseded result is simply never observed.
#[derive(Clone, Debug, Default)]
pub struct SheetChart {
    pub rows: Vec<RawPoint>,
    pub config: SheetConfig,
}

impl SheetChart {
    pub fn new(config: SheetConfig) -> Self {
        Self {
            rows: Vec::new(),
            config,
        }
    }

    pub fn with_rows(config: SheetConfig, rows: Vec<RawPoint>) -> Self {
        Self { rows, config }
    }

    pub fn push_row(&mut self, row: RawPoint) {
        self.rows.push(row);
    }

    /// Sanitized points, order preserved.
    pub fn valid_points(&self) -> Vec<DataPoint> {
        sanitize(&self.rows)
    }

    pub fn ranges(&self) -> Ranges {
        Ranges::from_points(&self.valid_points())
    }

    pub fn units_per_mm(&self) -> UnitsPerMm {
        UnitsPerMm::compute(&self.ranges(), self.config.sheet, self.config.squeeze)
    }

    /// Canonical per-axis affine scales.
    pub fn scales(&self) -> (AxisScale, AxisScale) {
        AxisScale::pair(&self.ranges(), self.config.sheet, self.config.squeeze)
    }

    /// Render dataset: mapped points plus axis-crossing lines.
    pub fn mapping(&self) -> SheetMapping {
        map_to_sheet(
            &self.valid_points(),
            &self.ranges(),
            self.config.sheet,
            self.config.squeeze,
        )
    }

    pub fn x_axis(&self) -> AxisConfig {
        x_axis_config(&self.config, &self.ranges(), self.units_per_mm())
    }

    pub fn y_axis(&self) -> AxisConfig {
        y_axis_config(&self.config, &self.ranges(), self.units_per_mm())
    }

    /// Data value at millimetre position 0, per axis.
    pub fn tick_at_zero(&self) -> (f64, f64) {
        let (sx, sy) = self.scales();
        (sx.tick_at_zero(), sy.tick_at_zero())
    }

    /// Resolve a sheet position back to data values (tooltip lookup).
    pub fn data_at(&self, mm_x: f64, mm_y: f64) -> (f64, f64) {
        let (sx, sy) = self.scales();
        (sx.from_mm(mm_x), sy.from_mm(mm_y))
    }

    /// Round-trip report for the validation panel.
    pub fn validation(&self) -> ValidationReport {
        round_trip_report(
            &self.rows,
            &self.ranges(),
            self.config.squeeze,
            self.units_per_mm(),
            self.tick_at_zero(),
        )
    }

    pub fn summary(&self) -> SheetSummary {
        SheetSummary {
            valid_points: self.valid_points().len(),
            total_rows: self.rows.len(),
            sheet: self.config.sheet,
            squeeze: self.config.squeeze,
        }
    }
}
