// File: crates/sheet-core/tests/formatting.rs
// Purpose: Validate engineering-notation decomposition and shared exponents.

use sheet_core::{common_exponent, decompose, format_scientific};

#[test]
fn zero_decomposes_to_zero_parts() {
    let parts = decompose(0.0);
    assert_eq!(parts.mantissa, "0");
    assert_eq!(parts.exponent, 0);
    assert_eq!(format_scientific(0.0), "0");
}

#[test]
fn non_finite_decomposes_to_zero_parts() {
    assert_eq!(decompose(f64::NAN).mantissa, "0");
    assert_eq!(decompose(f64::INFINITY).exponent, 0);
}

#[test]
fn large_values_bucket_to_multiples_of_three() {
    let parts = decompose(1500.0);
    assert_eq!(parts.mantissa, "1.5000");
    assert_eq!(parts.exponent, 3);

    let parts = decompose(2_500_000.0);
    assert_eq!(parts.mantissa, "2.5000");
    assert_eq!(parts.exponent, 6);
}

#[test]
fn small_values_bucket_symmetrically() {
    let parts = decompose(0.0025);
    assert_eq!(parts.mantissa, "2.5000");
    assert_eq!(parts.exponent, -3);
}

#[test]
fn up_to_three_integer_digits_keep_exponent_zero() {
    assert_eq!(decompose(7.0).exponent, 0);
    assert_eq!(decompose(42.0).exponent, 0);
    assert_eq!(decompose(999.0).exponent, 0);
    assert_eq!(decompose(1000.0).exponent, 3);
}

#[test]
fn integral_mantissas_print_without_decimals() {
    assert_eq!(decompose(100.0).mantissa, "100");
    assert_eq!(decompose(2000.0).mantissa, "2");
    assert_eq!(format_scientific(100.0), "100");
    assert_eq!(format_scientific(2000.0), "2*10^3");
}

#[test]
fn sign_stays_on_the_mantissa() {
    let parts = decompose(-1500.0);
    assert_eq!(parts.mantissa, "-1.5000");
    assert_eq!(parts.exponent, 3);
    assert_eq!(format_scientific(-6.25), "-6.2500");
}

#[test]
fn common_exponent_is_swap_invariant() {
    assert_eq!(common_exponent(-2500.0, 100.0), 3);
    assert_eq!(common_exponent(100.0, -2500.0), 3);
    assert_eq!(common_exponent(0.0, 100.0), 0);
    assert_eq!(common_exponent(0.0, 0.0), 0);
}

#[test]
fn common_exponent_zero_for_three_digit_magnitudes() {
    assert_eq!(common_exponent(-999.0, 999.0), 0);
    assert_eq!(common_exponent(1.0, 500.0), 0);
    assert_eq!(common_exponent(0.0005, 0.0025), -3);
}
