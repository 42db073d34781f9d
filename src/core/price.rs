//! Currency string parsing and formatting.
//!
//! Prices travel through the system as display strings like `"$2,700.00"`.
//! Parsing strips the currency symbol and thousands separators; formatting
//! renders two decimal places with a `$` prefix.

use crate::errors::{Error, Result};

/// Parses a currency-formatted price string into a number.
///
/// Accepts an optional leading `$` and thousands commas, e.g. `"$2,700.00"`,
/// `"650.00"`, `"$0.99"`.
///
/// # Errors
/// Returns [`Error::InvalidPrice`] if the remainder is not a finite
/// non-negative number.
pub fn parse_price(raw: &str) -> Result<f64> {
    let cleaned = raw.trim().trim_start_matches('$').replace(',', "");
    let value: f64 = cleaned.parse().map_err(|_| Error::InvalidPrice {
        raw: raw.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidPrice {
            raw: raw.to_string(),
        });
    }
    Ok(value)
}

/// Formats an amount as a display price with two decimal places, e.g.
/// `format_price(600.0)` yields `"$600.00"`.
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_plain_price() {
        assert_eq!(parse_price("$600.00").unwrap(), 600.0);
        assert_eq!(parse_price("650.00").unwrap(), 650.0);
    }

    #[test]
    fn test_parse_price_with_thousands_separator() {
        assert_eq!(parse_price("$2,700.00").unwrap(), 2700.0);
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert!(matches!(
            parse_price("gratis"),
            Err(Error::InvalidPrice { .. })
        ));
        assert!(matches!(parse_price(""), Err(Error::InvalidPrice { .. })));
        assert!(matches!(
            parse_price("$-5.00"),
            Err(Error::InvalidPrice { .. })
        ));
    }

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(600.0), "$600.00");
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_then_parse_round_trips() {
        let amount = 1234.56;
        assert_eq!(parse_price(&format_price(amount)).unwrap(), amount);
    }
}
