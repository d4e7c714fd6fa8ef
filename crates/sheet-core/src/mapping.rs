// File: crates/sheet-core/src/mapping.rs
// Summary: Forward point mapping onto the sheet plus zero-crossing axis lines.

use crate::points::{DataPoint, MappedPoint};
use crate::range::Ranges;
use crate::scale::AxisScale;
use crate::types::{SheetSize, SqueezeMargins};

/// Reference line drawn where a data axis crosses zero, spanning the
/// full sheet in the perpendicular direction.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLine {
    pub label: String,
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// Mapping output handed to the rendering collaborator.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheetMapping {
    pub points: Vec<MappedPoint>,
    pub axis_lines: Vec<AxisLine>,
}

/// Place every sanitized point on the sheet and emit axis-crossing lines.
/// Output order matches input order; the validation panel matches rows
/// by position.
///
/// Empty input produces an empty mapping: no points, no lines.
pub fn map_to_sheet(
    points: &[DataPoint],
    ranges: &Ranges,
    sheet: SheetSize,
    squeeze: SqueezeMargins,
) -> SheetMapping {
    if points.is_empty() {
        return SheetMapping::default();
    }

    let (scale_x, scale_y) = AxisScale::pair(ranges, sheet, squeeze);

    let mapped = points
        .iter()
        .map(|p| MappedPoint {
            x: scale_x.to_mm(p.x),
            y: scale_y.to_mm(p.y),
            original_x: p.x,
            original_y: p.y,
        })
        .collect();

    let mut axis_lines = Vec::new();

    // Vertical line at x = 0, full sheet height.
    if ranges.crosses_x_zero() {
        let mm = scale_x.to_mm(0.0);
        axis_lines.push(AxisLine {
            label: format!("y axis ({:.1}mm)", mm),
            start: (mm, 0.0),
            end: (mm, sheet.y),
        });
    }

    // Horizontal line at y = 0, full sheet width.
    if ranges.crosses_y_zero() {
        let mm = scale_y.to_mm(0.0);
        axis_lines.push(AxisLine {
            label: format!("x axis ({:.1}mm)", mm),
            start: (0.0, mm),
            end: (sheet.x, mm),
        });
    }

    SheetMapping {
        points: mapped,
        axis_lines,
    }
}
