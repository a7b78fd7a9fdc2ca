//! Numeric literal formatting.
//!
//! Literals are printed in the shortest decimal form a reader recognizes as the value: integers
//! without a decimal point, fractions with at most [`SIGNIFICANT_DIGITS`] significant digits and
//! never in exponent notation.

/// Significant digits kept for non-integral values (the double-precision ceiling).
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Longest fractional part emitted before the representation-noise clamp kicks in.
pub const MAX_FRACTION_DIGITS: usize = 15;

/// Format `value` as its shortest faithful decimal text.
///
/// - Integral values print every digit of their magnitude and no decimal point.
/// - Other values use `%g`-style rounding to [`SIGNIFICANT_DIGITS`] digits, falling back to
///   fixed-point when that would need an exponent.
/// - Trailing zeros and a dangling `.` are always removed.
///
/// Non-finite values print as `NaN`, `inf` and `-inf`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    if value.round() == value {
        // `-0.0` would otherwise keep its sign.
        if value == 0.0 {
            return "0".to_owned();
        }
        return format!("{value:.0}");
    }

    let mut out = format_general(value)
        .unwrap_or_else(|| format!("{:.*}", SIGNIFICANT_DIGITS, value));
    strip_trailing_zeros(&mut out);

    if let Some(dot) = out.find('.')
        && out.len() - dot - 1 > MAX_FRACTION_DIGITS
    {
        out.truncate(dot + 1 + MAX_FRACTION_DIGITS);
        strip_trailing_zeros(&mut out);
    }

    out
}

/// `%g` with [`SIGNIFICANT_DIGITS`] precision, or `None` when it would pick exponent notation.
fn format_general(value: f64) -> Option<String> {
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (_, exp) = sci.rsplit_once('e')?;
    let exp: i32 = exp.parse().ok()?;

    let max_exp = SIGNIFICANT_DIGITS as i32;
    if !(-4..max_exp).contains(&exp) {
        return None;
    }

    let decimals = (max_exp - 1 - exp) as usize;
    Some(format!("{value:.decimals$}"))
}

fn strip_trailing_zeros(s: &mut String) {
    if !s.contains('.') {
        return;
    }
    let keep = s.trim_end_matches('0').trim_end_matches('.').len();
    s.truncate(keep);
}

#[cfg(test)]
#[path = "../../tests/unit/expression/number.rs"]
mod tests;
