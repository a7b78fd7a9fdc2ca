use super::*;

#[test]
fn formats_reference_values() {
    let cases: &[(f64, &str)] = &[
        (100.0, "100"),
        (10.0, "10"),
        (10.3, "10.3"),
        (10.25, "10.25"),
        (0.125, "0.125"),
        (0.123456789, "0.123456789"),
        (123456789.0, "123456789"),
        (123456789.01234, "123456789.01234"),
    ];
    for &(input, expected) in cases {
        assert_eq!(format_number(input), expected, "input {input}");
    }
}

#[test]
fn integers_keep_full_magnitude() {
    assert_eq!(format_number(4294967296.0), "4294967296");
    assert_eq!(format_number(-9007199254740992.0), "-9007199254740992");
    assert_eq!(format_number(1e20), "100000000000000000000");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(0.0), "0");
}

#[test]
fn integral_values_round_trip_without_decimal_point() {
    for v in [1.0, -1.0, 42.0, 1e9, 2f64.powi(40), -3e12, 2f64.powi(62)] {
        let s = format_number(v);
        assert!(!s.contains('.'), "{s}");
        assert_eq!(s.parse::<f64>().unwrap(), v);
    }
}

#[test]
fn fractions_round_trip_without_noise() {
    for v in [
        0.1,
        0.2,
        0.3,
        1.5,
        -2.75,
        15.3,
        3.14159,
        99.999,
        0.000123,
        123456.789012,
        1.0 / 8.0,
    ] {
        let s = format_number(v);
        assert!(!s.contains('e') && !s.contains('E'), "{s}");
        assert!(!s.ends_with('0'), "{s}");
        assert!(!s.ends_with('.'), "{s}");
        assert_eq!(s.parse::<f64>().unwrap(), v, "{s}");
    }
}

#[test]
fn binary_noise_is_suppressed() {
    assert_eq!(format_number(0.1 + 0.2), "0.3");
    assert_eq!(format_number(1.0 / 3.0), "0.333333333333333");
    assert_eq!(format_number(2.0 / 3.0), "0.666666666666667");
}

#[test]
fn tiny_values_use_fixed_point() {
    assert_eq!(format_number(0.00001), "0.00001");
    assert_eq!(format_number(1.5e-7), "0.00000015");
    assert_eq!(format_number(-2.5e-6), "-0.0000025");
    // Below the fixed-point resolution everything rounds away.
    assert_eq!(format_number(1e-17), "0");
}

#[test]
fn long_fractions_are_clamped() {
    assert_eq!(format_number(0.000123456789012345), "0.000123456789012");
}

#[test]
fn large_fractions_avoid_exponent() {
    assert_eq!(format_number(1234567890123456.5), "1234567890123456.5");
}

#[test]
fn non_finite_values_have_fixed_spellings() {
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "inf");
    assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
}

#[test]
fn never_ends_with_decimal_point() {
    let mut v = 0.5;
    for _ in 0..60 {
        let s = format_number(v);
        assert!(!s.ends_with('.'), "{s}");
        v = v * 3.7 - 0.11;
    }
}
