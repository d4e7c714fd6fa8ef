// File: crates/sheet-core/src/points.rs
// Summary: Raw table rows, sanitized data points, and mapped sheet points.

/// One table row as entered: both fields may be empty or non-numeric
/// while the user is still typing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawPoint {
    pub x: String,
    pub y: String,
}

impl RawPoint {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Parse both fields, requiring finite numbers.
    pub fn parse(&self) -> Option<DataPoint> {
        let x = parse_field(&self.x)?;
        let y = parse_field(&self.y)?;
        Some(DataPoint { x, y })
    }
}

fn parse_field(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Sanitized point: both coordinates are finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

/// A data point placed on the sheet, keeping the original values for
/// tooltips and the round-trip panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MappedPoint {
    pub x: f64,
    pub y: f64,
    pub original_x: f64,
    pub original_y: f64,
}

/// Drop rows with empty or non-numeric fields, preserving order.
/// Partially filled rows are expected during editing, so exclusion is
/// silent and never an error.
pub fn sanitize(rows: &[RawPoint]) -> Vec<DataPoint> {
    rows.iter().filter_map(RawPoint::parse).collect()
}
