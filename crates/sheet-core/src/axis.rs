// File: crates/sheet-core/src/axis.rs
// Summary: Per-axis configuration objects for the rendering collaborator.

use crate::config::SheetConfig;
use crate::format::common_exponent;
use crate::range::Ranges;
use crate::scale::UnitsPerMm;
use crate::ticks::{make_tick_formatter, tick_step, TickFormatter};
use crate::types::TickLabelMode;

/// Everything the renderer needs for one axis: the mm extent, tick
/// spacing and visibility, the title with the shared-exponent suffix,
/// and the label formatter closure.
pub struct AxisConfig {
    pub min: f64,
    pub max: f64,
    pub tick_step: f64,
    pub tick_labels_visible: bool,
    pub title: String,
    pub common_exponent: i32,
    pub formatter: TickFormatter,
}

/// Title with the shared power of ten folded in: positive exponents read
/// "X Parameter / 10^3" (labels were divided), negative ones
/// "X Parameter * 10^3" (labels were multiplied).
fn axis_title(base: &str, exponent: i32) -> String {
    if exponent == 0 {
        base.to_string()
    } else if exponent > 0 {
        format!("{} / 10^{}", base, exponent)
    } else {
        format!("{} * 10^{}", base, -exponent)
    }
}

/// X axis configuration: spans [0, sheet width] in millimetres.
pub fn x_axis_config(config: &SheetConfig, ranges: &Ranges, units: UnitsPerMm) -> AxisConfig {
    let exponent = common_exponent(ranges.min_x, ranges.max_x);
    AxisConfig {
        min: 0.0,
        max: config.sheet.x,
        tick_step: tick_step(config.tick_label_mode, config.sheet.x, config.tick_counts.x),
        tick_labels_visible: config.tick_label_mode != TickLabelMode::None,
        title: axis_title("X Parameter", exponent),
        common_exponent: exponent,
        formatter: make_tick_formatter(ranges.min_x, config.squeeze.x, units.x, exponent),
    }
}

/// Y axis configuration: spans [0, sheet height] in millimetres.
pub fn y_axis_config(config: &SheetConfig, ranges: &Ranges, units: UnitsPerMm) -> AxisConfig {
    let exponent = common_exponent(ranges.min_y, ranges.max_y);
    AxisConfig {
        min: 0.0,
        max: config.sheet.y,
        tick_step: tick_step(config.tick_label_mode, config.sheet.y, config.tick_counts.y),
        tick_labels_visible: config.tick_label_mode != TickLabelMode::None,
        title: axis_title("Y Parameter", exponent),
        common_exponent: exponent,
        formatter: make_tick_formatter(ranges.min_y, config.squeeze.y, units.y, exponent),
    }
}
