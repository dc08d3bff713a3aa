//! Display formatting for conversion results.
//!
//! Bands, chosen on the absolute value:
//! - zero renders as `0`
//! - below 0.01: scientific, four digits after the mantissa point (`1.2300e-4`)
//! - 1000 and above: whole numbers as-is, otherwise two decimals with trailing
//!   zeros removed
//! - everything else: six significant digits with trailing zeros removed
//!
//! Rounding works on the exact decimal expansion of the `f64`, and a value
//! sitting exactly halfway rounds away from zero (`1000.125` -> `1000.13`).

const SIGNIFICANT_DIGITS: usize = 6;
const EXPONENT_DIGITS: usize = 4;
const FIXED_DIGITS: usize = 2;

pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs < 0.01 {
        return format!("{sign}{}", to_exponential(abs, EXPONENT_DIGITS));
    }

    if abs >= 1000.0 {
        if value.fract() == 0.0 {
            return format!("{value:.0}");
        }
        return format!("{sign}{}", trim_fraction_zeros(to_fixed(abs, FIXED_DIGITS)));
    }

    format!(
        "{sign}{}",
        trim_fraction_zeros(to_precision(abs, SIGNIFICANT_DIGITS))
    )
}

/// Every finite `f64` is a dyadic rational, so 1074 fractional digits
/// (down to the smallest subnormal) spell it out with no rounding.
fn exact_decimal(abs: f64) -> String {
    format!("{abs:.1074}")
}

/// Digits of `abs` from the first nonzero one, and that digit's power of ten.
fn exact_digits(abs: f64) -> (Vec<u8>, i32) {
    let text = exact_decimal(abs);
    let (int, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let int = int.trim_start_matches('0');
    if !int.is_empty() {
        let digits = int.bytes().chain(frac.bytes()).map(|b| b - b'0').collect();
        (digits, int.len() as i32 - 1)
    } else {
        let zeros = frac.len() - frac.trim_start_matches('0').len();
        let digits = frac[zeros..].bytes().map(|b| b - b'0').collect();
        (digits, -(zeros as i32) - 1)
    }
}

/// Add one in the last place. Returns true when the carry runs off the front.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

fn round_significant(abs: f64, count: usize) -> (Vec<u8>, i32) {
    let (mut digits, mut exponent) = exact_digits(abs);
    let round_up = digits.get(count).is_some_and(|&d| d >= 5);
    digits.resize(count, 0);
    if round_up && increment(&mut digits) {
        digits.insert(0, 1);
        digits.truncate(count);
        exponent += 1;
    }
    (digits, exponent)
}

fn render(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// `d.dddde-N` with `fraction_digits` digits after the point.
fn to_exponential(abs: f64, fraction_digits: usize) -> String {
    let (digits, exponent) = round_significant(abs, fraction_digits + 1);
    let mantissa = render(&digits);
    let (lead, rest) = mantissa.split_at(1);
    if rest.is_empty() {
        format!("{lead}e{exponent}")
    } else {
        format!("{lead}.{rest}e{exponent}")
    }
}

/// Fixed notation with `count` significant digits. Only valid for magnitudes
/// that do not need an exponent, which holds for the middle band.
fn to_precision(abs: f64, count: usize) -> String {
    // Rounding first decides the exponent, so 999.9999 lands on 10^3.
    let (digits, exponent) = round_significant(abs, count);
    let text = render(&digits);
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{zeros}{text}");
    }
    let split = (exponent as usize + 1).min(text.len());
    let (int, frac) = text.split_at(split);
    if frac.is_empty() {
        int.to_string()
    } else {
        format!("{int}.{frac}")
    }
}

fn to_fixed(abs: f64, fraction_digits: usize) -> String {
    let text = exact_decimal(abs);
    let (int, frac) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mut digits: Vec<u8> = int
        .bytes()
        .chain(frac.bytes().take(fraction_digits))
        .map(|b| b - b'0')
        .collect();
    let round_up = frac.as_bytes().get(fraction_digits).is_some_and(|&b| b >= b'5');
    if round_up && increment(&mut digits) {
        digits.insert(0, 1);
    }
    let text = render(&digits);
    let (int, frac) = text.split_at(text.len() - fraction_digits);
    format!("{int}.{frac}")
}

fn trim_fraction_zeros(mut s: String) -> String {
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}
