use std::fmt::Display;

use crate::constants::{NO_PAYBACK_MESSAGE, NO_VALUE};
use crate::models::output::{Payback, RechargeOutput};

#[derive(Debug)]
pub struct RechargeError {
    msg: String,
}

impl From<String> for RechargeError {
    fn from(msg: String) -> Self {
        RechargeError { msg }
    }
}

impl From<RechargeError> for String {
    fn from(value: RechargeError) -> String {
        value.msg
    }
}

impl From<&str> for RechargeError {
    fn from(msg: &str) -> Self {
        RechargeError { msg: msg.into() }
    }
}

impl Display for RechargeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl std::error::Error for RechargeError {}

fn group_thousands(integer_part: &str) -> String {
    let len = integer_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, c) in integer_part.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

// halves go away from zero, `format!` alone would send them to the even digit
fn round_abs(value: f64, digits: usize) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value.abs() * scale).round() / scale
}

// absolute value with grouped thousands and `digits` decimals, optionally trimming trailing zeros
fn format_abs(value: f64, digits: usize, trim: bool) -> String {
    let fixed = format!("{:.*}", digits, round_abs(value, digits));
    let (integer_part, fraction) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), ""),
    };
    let fraction = if trim {
        fraction.trim_end_matches('0')
    } else {
        fraction
    };
    let integer_part = group_thousands(integer_part);
    if fraction.is_empty() {
        integer_part
    } else {
        format!("{}.{}", integer_part, fraction)
    }
}

fn is_negative_after_rounding(value: f64, digits: usize) -> bool {
    value < 0.0 && round_abs(value, digits) > 0.0
}

/// Number with thousands separators and at most `digits` decimals (trailing zeros dropped).
/// NaN and infinite values are shown as a dash.
pub fn fmt_number(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return NO_VALUE.into();
    }
    let sign = if is_negative_after_rounding(value, digits) { "-" } else { "" };
    format!("{}{}", sign, format_abs(value, digits, true))
}

/// US dollar amount with exactly `digits` decimals.
/// NaN and infinite values are shown as a dash.
pub fn fmt_currency(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return NO_VALUE.into();
    }
    let sign = if is_negative_after_rounding(value, digits) { "-" } else { "" };
    format!("{}${}", sign, format_abs(value, digits, false))
}

/// Payback period for display, never prints the infinite sentinel
pub fn fmt_payback(output: &RechargeOutput) -> String {
    match output.payback() {
        Payback::Years(years) => format!("{} years", fmt_number(years, 1)),
        Payback::Unbounded => NO_PAYBACK_MESSAGE.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::input::RechargeInput;
    use crate::modules::recharge::functions::compute;

    #[test]
    fn numbers_are_grouped_and_trimmed() {
        assert_eq!(fmt_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(fmt_number(1.6666667, 3), "1.667");
        assert_eq!(fmt_number(200.0, 2), "200");
        assert_eq!(fmt_number(0.6, 0), "1");
        assert_eq!(fmt_number(999.0, 0), "999");
        assert_eq!(fmt_number(1000.0, 0), "1,000");
        assert_eq!(fmt_number(-1234.5, 1), "-1,234.5");
        assert_eq!(fmt_number(-0.0001, 2), "0");
        assert_eq!(fmt_number(0.125, 2), "0.13");
        assert_eq!(fmt_number(2.5, 0), "3");
        assert_eq!(fmt_number(-2.5, 0), "-3");
        assert_eq!(fmt_number(-0.005, 2), "-0.01");
    }

    #[test]
    fn non_finite_values_are_dashes() {
        assert_eq!(fmt_number(f64::NAN, 2), NO_VALUE);
        assert_eq!(fmt_number(f64::INFINITY, 2), NO_VALUE);
        assert_eq!(fmt_currency(f64::NAN, 0), NO_VALUE);
        assert_eq!(fmt_currency(f64::NEG_INFINITY, 0), NO_VALUE);
    }

    #[test]
    fn currency() {
        assert_eq!(fmt_currency(50_000.0, 0), "$50,000");
        assert_eq!(fmt_currency(5_400.4, 0), "$5,400");
        assert_eq!(fmt_currency(-3_400.0, 0), "-$3,400");
        assert_eq!(fmt_currency(12.5, 2), "$12.50");
        assert_eq!(fmt_currency(0.0, 0), "$0");
        assert_eq!(fmt_currency(2.5, 0), "$3");
        assert_eq!(fmt_currency(12.125, 2), "$12.13");
        assert_eq!(fmt_currency(-1_500.5, 0), "-$1,501");
    }

    #[test]
    fn payback_text() {
        let output = compute(&RechargeInput::baseline());
        assert_eq!(fmt_payback(&output), "4.9 years");

        let output = RechargeOutput {
            simple_payback_yrs: 2.25,
            ..output
        };
        assert_eq!(fmt_payback(&output), "2.3 years");

        let output = compute(&RechargeInput {
            water_price_per_af: 0.0,
            ..RechargeInput::baseline()
        });
        assert_eq!(fmt_payback(&output), NO_PAYBACK_MESSAGE);
    }

    #[test]
    fn error_messages_round_trip() {
        let err = RechargeError::from("storage unavailable");
        assert_eq!(err.to_string(), "storage unavailable");
        let msg: String = RechargeError::from(format!("field {}", "landAcres")).into();
        assert_eq!(msg, "field landAcres");
    }
}
