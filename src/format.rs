//! Display formatting and input sanitisation.
//!
//! These helpers sit at the boundary between free-text input and the
//! calculator. None of them affect calculation results.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::calculation::round_whole_currency;

/// Formats an amount as whole US dollars with thousands separators.
///
/// # Examples
///
/// ```
/// use workers_comp_engine::format::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::from(1676)), "$1,676");
/// assert_eq!(format_currency(Decimal::new(12345, 1)), "$1,235");
/// assert_eq!(format_currency(Decimal::from(-25)), "-$25");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_whole_currency(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();
    format!("{}${}", sign, group_thousands(&digits))
}

/// Strips every non-digit character and parses what remains.
///
/// Empty or unparseable input yields zero. Decimal points are stripped like
/// any other character, so `"12.50"` parses as `1250`.
///
/// # Examples
///
/// ```
/// use workers_comp_engine::format::parse_formatted_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_formatted_number("$1,200"), Decimal::from(1200));
/// assert_eq!(parse_formatted_number("abc"), Decimal::ZERO);
/// ```
pub fn parse_formatted_number(value: &str) -> Decimal {
    let digits = digits_only(value);
    if digits.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(&digits).unwrap_or(Decimal::ZERO)
}

/// Reformats wage input as the user types: digits only, comma grouped.
///
/// Input with no digits becomes an empty string.
///
/// # Examples
///
/// ```
/// use workers_comp_engine::format::format_number_input;
///
/// assert_eq!(format_number_input("1200"), "1,200");
/// assert_eq!(format_number_input("$0012a34"), "1,234");
/// assert_eq!(format_number_input("abc"), "");
/// ```
pub fn format_number_input(value: &str) -> String {
    let digits = digits_only(value);
    if digits.is_empty() {
        return String::new();
    }
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return "0".to_string();
    }
    group_thousands(trimmed)
}

/// Formats a replacement rate as a whole percentage (0.6667 -> "67%").
pub fn format_percent(rate: Decimal) -> String {
    format!("{}%", round_whole_currency(rate * Decimal::from(100)))
}

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
