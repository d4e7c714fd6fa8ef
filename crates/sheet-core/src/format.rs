// File: crates/sheet-core/src/format.rs
// Summary: Engineering scientific notation (exponents in multiples of 3).

/// A number split as mantissa * 10^exponent, exponent a multiple of 3.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScientificParts {
    pub mantissa: String,
    pub exponent: i32,
}

/// Split `value` into engineering-notation parts.
///
/// Zero and non-finite input decompose to {"0", 0}. The mantissa keeps
/// the sign and prints as an integer when it has no fractional part,
/// otherwise fixed to 4 decimals.
pub fn decompose(value: f64) -> ScientificParts {
    if value == 0.0 || !value.is_finite() {
        return ScientificParts {
            mantissa: "0".to_string(),
            exponent: 0,
        };
    }

    let exponent = bucket_exponent(value.abs());
    let mantissa = value / 10f64.powi(exponent);
    ScientificParts {
        mantissa: format_mantissa(mantissa),
        exponent,
    }
}

/// Largest multiple of 3 keeping at most 3 integer digits in the mantissa.
/// Values below 1 bucket symmetrically (0.0025 -> exponent -3).
fn bucket_exponent(abs: f64) -> i32 {
    if abs < 1.0 {
        ((abs.log10() / 3.0).floor() as i32) * 3
    } else {
        let integer_digits = abs.log10().floor() as i32 + 1;
        if integer_digits <= 3 {
            0
        } else {
            ((integer_digits - 1) / 3) * 3
        }
    }
}

fn format_mantissa(m: f64) -> String {
    if m.fract() == 0.0 {
        format!("{}", m as i64)
    } else {
        format!("{:.4}", m)
    }
}

/// Human-readable engineering notation: "<mantissa>" when the exponent
/// is 0, else "<mantissa>*10^<exponent>".
pub fn format_scientific(value: f64) -> String {
    let parts = decompose(value);
    if parts.exponent == 0 {
        parts.mantissa
    } else {
        format!("{}*10^{}", parts.mantissa, parts.exponent)
    }
}

/// Shared exponent for an axis: the exponent of max(|min|, |max|), so
/// every tick label on the axis sits on one power-of-ten scale.
/// Symmetric in its arguments; zero magnitude yields 0.
pub fn common_exponent(min: f64, max: f64) -> i32 {
    let max_abs = min.abs().max(max.abs());
    if max_abs == 0.0 {
        return 0;
    }
    decompose(max_abs).exponent
}
