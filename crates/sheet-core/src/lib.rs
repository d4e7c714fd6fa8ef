// File: crates/sheet-core/src/lib.rs
// Summary: Core library entry point; exports the sheet mapping, formatting,
// and validation API.

pub mod axis;
pub mod chart;
pub mod config;
pub mod format;
pub mod grid;
pub mod mapping;
pub mod points;
pub mod range;
pub mod scale;
pub mod theme;
pub mod ticks;
pub mod types;
pub mod validate;

pub use axis::{x_axis_config, y_axis_config, AxisConfig};
pub use chart::{SheetChart, SheetSummary};
pub use config::{ConfigError, SheetConfig};
pub use format::{common_exponent, decompose, format_scientific, ScientificParts};
pub use grid::{gridline_style, GridStyle};
pub use mapping::{map_to_sheet, AxisLine, SheetMapping};
pub use points::{sanitize, DataPoint, MappedPoint, RawPoint};
pub use range::Ranges;
pub use scale::{AxisScale, UnitsPerMm};
pub use theme::{Rgba, Theme};
pub use ticks::{format_tick_label, make_tick_formatter, tick_value, TickFormatter};
pub use types::{SheetSize, SqueezeMargins, TickCounts, TickLabelMode};
pub use validate::{round_trip_report, RowCheck, RowStatus, ValidationReport};
