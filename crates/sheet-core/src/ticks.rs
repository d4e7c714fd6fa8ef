// File: crates/sheet-core/src/ticks.rs
// Summary: Tick-to-data inversion, label formatting, and step derivation.

use crate::format::format_scientific;
use crate::types::{TickLabelMode, TICK_STEP_MM};

/// Boxed label formatter handed to the rendering collaborator; takes a
/// tick's millimetre position and returns its display string.
pub type TickFormatter = Box<dyn Fn(f64) -> String>;

/// Data value at a millimetre position on one axis.
/// Inverse of the forward map, in units-per-mm form; agrees with
/// `AxisScale::from_mm` to within floating-point rounding.
pub fn tick_value(mm: f64, min: f64, squeeze: f64, units_per_mm: f64) -> f64 {
    (min - squeeze * units_per_mm) + mm * units_per_mm
}

/// Combine the resolved data value and the mm position into one label.
///
/// With a non-zero common exponent the value is scaled onto the shared
/// power of ten and fixed to 4 decimals; otherwise it goes through
/// `format_scientific`. The mm position prints to 1 decimal with the
/// trailing ".0" dropped, plus a "(mm)" marker at position 0 only.
pub fn format_tick_label(mm: f64, data_value: f64, common_exponent: i32) -> String {
    let value = if common_exponent != 0 {
        format!("{:.4}", data_value / 10f64.powi(common_exponent))
    } else {
        format_scientific(data_value)
    };
    let rounded = (mm * 10.0).round() / 10.0;
    let mm_text = if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    };
    let suffix = if rounded == 0.0 { "(mm)" } else { "" };
    format!("{} | {}{}", value, mm_text, suffix)
}

/// Build the per-axis formatter closure capturing the resolved state.
pub fn make_tick_formatter(
    min: f64,
    squeeze: f64,
    units_per_mm: f64,
    common_exponent: i32,
) -> TickFormatter {
    Box::new(move |mm| {
        let value = tick_value(mm, min, squeeze, units_per_mm);
        format_tick_label(mm, value, common_exponent)
    })
}

/// Label spacing for a sheet dimension under the given mode.
/// `None` keeps the 10mm cadence for gridline purposes; label visibility
/// is a separate flag on the axis config.
pub fn tick_step(mode: TickLabelMode, dimension: f64, tick_count: u32) -> f64 {
    match mode {
        TickLabelMode::Interval => dimension / f64::from(tick_count.max(1)),
        TickLabelMode::None | TickLabelMode::All => TICK_STEP_MM,
    }
}

/// Millimetre stations from 0 through `extent` (inclusive) every `step`.
pub fn tick_positions(extent: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || extent < 0.0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut i = 0u32;
    loop {
        let pos = step * f64::from(i);
        if pos > extent + 1e-9 {
            break;
        }
        out.push(pos);
        i += 1;
    }
    out
}
