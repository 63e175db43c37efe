//! Human-readable rendering of pipeline values.
//!
//! Tiny nonzero magnitudes switch to scientific notation so that values such
//! as a `3.7e-44` probability don't collapse to `0.000`.

pub const DEFAULT_DECIMALS: usize = 3;

/// Magnitudes below this (and nonzero) are printed in scientific notation.
const SCIENTIFIC_BELOW: f64 = 0.001;

/// Magnitudes at or above this are printed in exponent form even in fixed mode.
const FIXED_LIMIT: f64 = 1e21;

/// Most fractional digits fixed-point output will produce.
const MAX_DECIMALS: usize = 100;

/// Enough fractional digits to spell out any finite `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Format `x` with `decimals` fractional digits, or as `d.dde-n` when
/// `0 < |x| < 0.001`.
#[must_use]
pub fn format_number(x: f64, decimals: usize) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    if x != 0.0 && x.abs() < SCIENTIFIC_BELOW {
        format!("{x:.2e}")
    } else {
        to_fixed(x, decimals)
    }
}

/// Fixed-point rendering that rounds exact halves away from zero and falls
/// back to the shortest exponent form (`2.5e+43`) from `1e21` upwards.
///
/// `decimals` is capped at 100. Negative zero prints as zero.
fn to_fixed(x: f64, decimals: usize) -> String {
    if x.abs() >= FIXED_LIMIT {
        return format!("{x:e}").replacen("e", "e+", 1);
    }
    let decimals = decimals.min(MAX_DECIMALS);

    let exact = format!("{:.*}", EXACT_DIGITS, x.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    let mut int_len = int_part.len();

    // The expansion is exact, so a next digit of 5 or more means "half or above".
    if frac_part.as_bytes().get(decimals).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if x < 0.0 {
        out.push('-');
    }
    let (int_digits, frac_digits) = digits.split_at(int_len);
    out.extend(int_digits.iter().map(|&d| char::from(d)));
    if decimals > 0 {
        out.push('.');
        out.extend(frac_digits.iter().map(|&d| char::from(d)));
    }
    out
}

#[inline]
#[must_use]
pub fn format_default(x: f64) -> String {
    format_number(x, DEFAULT_DECIMALS)
}

/// Probability as a percentage with two decimals, e.g. `92.07%`.
#[must_use]
pub fn format_percent(p: f64) -> String {
    if p.is_finite() {
        format!("{}%", to_fixed(p * 100.0, 2))
    } else {
        format!("{}%", format_number(p, 2))
    }
}
