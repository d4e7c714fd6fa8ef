// File: crates/sheet-core/src/config.rs
// Summary: Configuration boundary: sheet geometry validation and tick display options.

use thiserror::Error;

use crate::types::{SheetSize, SqueezeMargins, TickCounts, TickLabelMode};

/// Structurally impossible configuration, rejected before any mapping runs.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("sheet dimensions must be positive, got {x}mm x {y}mm")]
    NonPositiveSheet { x: f64, y: f64 },
    #[error("squeeze margins must be non-negative, got {x}mm / {y}mm")]
    NegativeMargin { x: f64, y: f64 },
    #[error("{axis} squeeze {margin}mm leaves no drawing area on a {dimension}mm sheet")]
    MarginTooLarge {
        axis: char,
        margin: f64,
        dimension: f64,
    },
}

/// User-controlled configuration consumed by every pipeline stage.
#[derive(Clone, Copy, Debug)]
pub struct SheetConfig {
    pub sheet: SheetSize,
    pub squeeze: SqueezeMargins,
    pub tick_label_mode: TickLabelMode,
    pub tick_counts: TickCounts,
    /// Render 10mm/50mm gridlines with their tier colors (true) or fully
    /// transparent (false).
    pub show_grid_markers: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            sheet: SheetSize::default(),
            squeeze: SqueezeMargins::default(),
            tick_label_mode: TickLabelMode::default(),
            tick_counts: TickCounts::default(),
            show_grid_markers: true,
        }
    }
}

impl SheetConfig {
    /// Reject geometry the mapping formulas cannot survive.
    ///
    /// The formulas themselves stay unguarded: a caller that skips this
    /// check receives the negative or infinite units-per-mm documented in
    /// `UnitsPerMm::compute`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sheet.x <= 0.0 || self.sheet.y <= 0.0 {
            return Err(ConfigError::NonPositiveSheet {
                x: self.sheet.x,
                y: self.sheet.y,
            });
        }
        if self.squeeze.x < 0.0 || self.squeeze.y < 0.0 {
            return Err(ConfigError::NegativeMargin {
                x: self.squeeze.x,
                y: self.squeeze.y,
            });
        }
        if self.squeeze.x >= self.sheet.x / 2.0 {
            return Err(ConfigError::MarginTooLarge {
                axis: 'x',
                margin: self.squeeze.x,
                dimension: self.sheet.x,
            });
        }
        if self.squeeze.y >= self.sheet.y / 2.0 {
            return Err(ConfigError::MarginTooLarge {
                axis: 'y',
                margin: self.squeeze.y,
                dimension: self.sheet.y,
            });
        }
        Ok(())
    }
}
