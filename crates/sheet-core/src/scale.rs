// File: crates/sheet-core/src/scale.rs
// Summary: Canonical affine map between data space and sheet millimetres.

use crate::range::Ranges;
use crate::types::{SheetSize, SqueezeMargins};

/// Affine map for one axis: [min, min + span] onto [margin, extent - margin].
///
/// Forward and inverse share the same parameters, so `from_mm(to_mm(v))`
/// reproduces `v` up to floating-point rounding, and units-per-mm is a
/// derived property rather than an independently recomputed value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    pub min: f64,
    pub span: f64,
    pub margin: f64,
    pub extent: f64,
}

impl AxisScale {
    pub fn new(min: f64, span: f64, margin: f64, extent: f64) -> Self {
        Self {
            min,
            span,
            margin,
            extent,
        }
    }

    /// Drawing width/height left after both margins. Unguarded: a margin
    /// at or beyond half the extent yields non-positive drawing space,
    /// which propagates to the caller (see `SheetConfig::validate`).
    #[inline]
    pub fn drawing_extent(&self) -> f64 {
        self.extent - 2.0 * self.margin
    }

    /// Data units represented by one millimetre.
    #[inline]
    pub fn units_per_mm(&self) -> f64 {
        self.span / self.drawing_extent()
    }

    /// Forward map: data value -> millimetre offset on the sheet.
    #[inline]
    pub fn to_mm(&self, value: f64) -> f64 {
        (value - self.min) * self.drawing_extent() / self.span + self.margin
    }

    /// Inverse map: millimetre offset -> data value, in units-per-mm form.
    #[inline]
    pub fn from_mm(&self, mm: f64) -> f64 {
        (self.min - self.margin * self.units_per_mm()) + mm * self.units_per_mm()
    }

    /// Data value at millimetre position 0 (the sheet edge).
    #[inline]
    pub fn tick_at_zero(&self) -> f64 {
        self.min - self.margin * self.units_per_mm()
    }

    /// Both axis scales from the derived ranges and sheet geometry.
    /// Spans come zero-guarded from `Ranges`.
    pub fn pair(ranges: &Ranges, sheet: SheetSize, squeeze: SqueezeMargins) -> (AxisScale, AxisScale) {
        (
            AxisScale::new(ranges.min_x, ranges.span_x(), squeeze.x, sheet.x),
            AxisScale::new(ranges.min_y, ranges.span_y(), squeeze.y, sheet.y),
        )
    }
}

/// Per-axis units-per-millimetre, the quantity surfaced by the scale
/// display and the validation panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitsPerMm {
    pub x: f64,
    pub y: f64,
}

impl UnitsPerMm {
    /// span / (dimension - 2 * margin) per axis. The denominator is not
    /// guarded here: callers bypassing the configuration boundary receive
    /// a negative or infinite scale.
    pub fn compute(ranges: &Ranges, sheet: SheetSize, squeeze: SqueezeMargins) -> Self {
        let (sx, sy) = AxisScale::pair(ranges, sheet, squeeze);
        Self {
            x: sx.units_per_mm(),
            y: sy.units_per_mm(),
        }
    }
}
