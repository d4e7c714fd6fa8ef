// File: crates/sheet-core/src/grid.rs
// Summary: Gridline styling tiers keyed on 10mm/50mm multiples.

use crate::theme::{Rgba, Theme};

/// Color and stroke width for one gridline station.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStyle {
    pub color: Rgba,
    pub width: f32,
}

const MULTIPLE_TOLERANCE: f64 = 1e-9;

fn is_multiple_of(value: f64, base: f64) -> bool {
    let rem = (value % base).abs();
    rem < MULTIPLE_TOLERANCE || (base - rem) < MULTIPLE_TOLERANCE
}

/// Style for the gridline at `value` millimetres.
///
/// Multiples of 50 draw strongest (width 2), multiples of 10 weaker
/// (width 1), everything else transparent with width 0. Hiding the
/// markers blanks the color but keeps the tier widths.
pub fn gridline_style(value: f64, show_markers: bool, theme: &Theme) -> GridStyle {
    let width = if is_multiple_of(value, 50.0) {
        2.0
    } else if is_multiple_of(value, 10.0) {
        1.0
    } else {
        0.0
    };

    let color = if !show_markers {
        Rgba::TRANSPARENT
    } else if is_multiple_of(value, 50.0) {
        theme.grid_major
    } else if is_multiple_of(value, 10.0) {
        theme.grid_minor
    } else {
        Rgba::TRANSPARENT
    };

    GridStyle { color, width }
}
