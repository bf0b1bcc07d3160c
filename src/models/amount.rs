//! Parsing and formatting of user-entered amounts
//!
//! Input is read the way a lenient float parser reads it: surrounding
//! whitespace is ignored and the longest numeric prefix wins, so `"12.5abc"`
//! is 12.5 while `"abc"` is not a number.

use crate::error::{BudgetError, BudgetResult};

/// Parse the longest numeric prefix of `raw`.
///
/// Accepts an optional sign, an optional `$`, digits with at most one decimal
/// point and an optional exponent. Returns `None` when no digits are found or
/// the value is not finite.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut number = String::with_capacity(s.len());
    let mut i = 0;

    if let Some(&sign @ (b'+' | b'-')) = bytes.first() {
        number.push(sign as char);
        i += 1;
    }
    if bytes.get(i) == Some(&b'$') {
        i += 1;
    }

    let mut digits = 0;
    let mut seen_point = false;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        number.push(b as char);
        i += 1;
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if let Some(b'e' | b'E') = bytes.get(i) {
        let mut j = i + 1;
        if let Some(b'+' | b'-') = bytes.get(j) {
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            number.push_str(&s[i..j]);
        }
    }

    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse an income figure; anything that isn't a positive number is rejected
pub fn parse_income(raw: &str) -> BudgetResult<f64> {
    match parse_number(raw) {
        Some(value) if value > 0.0 => Ok(value),
        _ => Err(BudgetError::InvalidInput(
            "Please enter a valid income amount".into(),
        )),
    }
}

/// Parse a category amount, coercing anything unusable to 0
pub fn parse_amount(raw: &str) -> f64 {
    parse_number(raw).filter(|v| *v >= 0.0).unwrap_or(0.0)
}

/// Format an amount with a currency symbol and two decimals
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, -amount)
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_number("1000"), Some(1000.0));
        assert_eq!(parse_number("  12.50 "), Some(12.5));
        assert_eq!(parse_number("-5"), Some(-5.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("$300"), Some(300.0));
    }

    #[test]
    fn test_parse_numeric_prefix() {
        assert_eq!(parse_number("12.5abc"), Some(12.5));
        assert_eq!(parse_number("1.2.3"), Some(1.2));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("2e"), Some(2.0));
        assert_eq!(parse_number("3E-1x"), Some(0.3));
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("1e999"), None);
    }

    #[test]
    fn test_parse_income() {
        assert_eq!(parse_income("2500").unwrap(), 2500.0);
        assert!(parse_income("-5").is_err());
        assert!(parse_income("0").is_err());
        assert!(parse_income("lots").is_err());

        let err = parse_income("").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid income amount");
    }

    #[test]
    fn test_parse_amount_coerces() {
        assert_eq!(parse_amount("150"), 150.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("-20"), 0.0);
        assert_eq!(parse_amount("0"), 0.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1000.0, "$"), "$1000.00");
        assert_eq!(format_amount(0.0, "$"), "$0.00");
        assert_eq!(format_amount(-100.5, "$"), "-$100.50");
        assert_eq!(format_amount(12.346, "€"), "€12.35");
    }
}
