// File: crates/sheet-core/tests/ticks.rs
// Purpose: Validate tick value inversion, label formatting, and step derivation.

use sheet_core::ticks::{tick_positions, tick_step};
use sheet_core::{
    format_tick_label, make_tick_formatter, tick_value, AxisScale, TickLabelMode,
};

#[test]
fn tick_value_agrees_with_canonical_inverse() {
    // Same affine relation in two parameterizations; they must agree to
    // within floating-point rounding.
    let scale = AxisScale::new(2.0, 98.0, 10.0, 180.0);
    let u = scale.units_per_mm();
    for i in 0..=36 {
        let mm = f64::from(i) * 5.0;
        let via_units = tick_value(mm, scale.min, scale.margin, u);
        let via_scale = scale.from_mm(mm);
        assert!(
            (via_units - via_scale).abs() < 1e-9,
            "divergence at {}mm: {} vs {}",
            mm,
            via_units,
            via_scale
        );
    }
}

#[test]
fn labels_combine_value_and_mm_position() {
    // Data value 0 at 10mm on an unscaled axis.
    assert_eq!(format_tick_label(10.0, 0.0, 0), "0 | 10");
    // The sheet edge gets the unit marker.
    assert_eq!(format_tick_label(0.0, -6.25, 0), "-6.2500 | 0(mm)");
    // Fractional positions round to one decimal.
    assert_eq!(format_tick_label(12.34, 1.0, 0), "1 | 12.3");
}

#[test]
fn labels_scale_by_the_common_exponent() {
    assert_eq!(format_tick_label(20.0, 1500.0, 3), "1.5000 | 20");
    assert_eq!(format_tick_label(20.0, -500.0, 3), "-0.5000 | 20");
    // Exponent 0 falls through to engineering notation.
    assert_eq!(format_tick_label(20.0, 1500.0, 0), "1.5000*10^3 | 20");
}

#[test]
fn formatter_closure_captures_axis_state() {
    // min 0, squeeze 10, 0.625 units/mm: data 0 sits at 10mm.
    let fmt = make_tick_formatter(0.0, 10.0, 0.625, 0);
    assert_eq!(fmt(10.0), "0 | 10");
    assert_eq!(fmt(0.0), "-6.2500 | 0(mm)");
}

#[test]
fn step_follows_the_label_mode() {
    assert_eq!(tick_step(TickLabelMode::All, 180.0, 5), 10.0);
    assert_eq!(tick_step(TickLabelMode::None, 180.0, 5), 10.0);
    assert_eq!(tick_step(TickLabelMode::Interval, 180.0, 5), 36.0);
    // A zero count clamps to 1 instead of dividing by zero.
    assert_eq!(tick_step(TickLabelMode::Interval, 180.0, 0), 180.0);
}

#[test]
fn positions_cover_the_sheet_inclusively() {
    let positions = tick_positions(180.0, 10.0);
    assert_eq!(positions.len(), 19);
    assert_eq!(positions[0], 0.0);
    assert_eq!(positions[18], 180.0);

    assert!(tick_positions(100.0, 0.0).is_empty());
    assert!(tick_positions(-1.0, 10.0).is_empty());
}
