//! Currency conversion and price formatting.
//!
//! Prices are decimal display-unit amounts (`f64`), converted through a
//! static rate table anchored to USD. The converter never fails: an
//! unknown currency code is treated as the reference currency, because no
//! caller in the UI is written to handle a conversion error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    PKR,
    AED,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::PKR => "PKR",
            Currency::AED => "AED",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::PKR => "\u{20a8}",
            Currency::AED => "\u{062f}.\u{0625}",
        }
    }

    /// Conversion rate relative to USD (the reference currency, rate 1).
    pub fn rate(&self) -> f64 {
        match self {
            Currency::USD => 1.0,
            Currency::EUR => 0.85,
            Currency::GBP => 0.73,
            Currency::PKR => 280.0,
            Currency::AED => 3.67,
        }
    }

    /// Whether the symbol is rendered after the amount.
    ///
    /// AED places the symbol after the amount with a space; every other
    /// supported currency prefixes it.
    pub fn symbol_after_amount(&self) -> bool {
        matches!(self, Currency::AED)
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "PKR" => Some(Currency::PKR),
            "AED" => Some(Currency::AED),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Rate for a currency code, with the silent unknown-code fallback.
fn rate_for(code: &str) -> f64 {
    Currency::from_code(code).map_or(1.0, |c| c.rate())
}

/// Round half-up to 2 decimal places.
fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Convert an amount between currencies.
///
/// Normalizes to USD by dividing by the source rate, then multiplies by
/// the target rate, rounding to 2 decimal places. Unknown codes fall back
/// to rate 1 rather than failing.
pub fn convert(amount: f64, from: &str, to: &str) -> f64 {
    let usd = amount / rate_for(from);
    round2(usd * rate_for(to))
}

/// Format a price with its currency symbol.
///
/// The integer part is grouped with thousands separators; a fractional
/// part is shown to 2 places only when present. Unknown codes use the
/// code itself as the symbol.
pub fn format_price(amount: f64, code: &str) -> String {
    match Currency::from_code(code) {
        Some(currency) if currency.symbol_after_amount() => {
            format!("{} {}", plain_amount(amount), currency.symbol())
        }
        Some(currency) => format!("{}{}", currency.symbol(), grouped_amount(amount)),
        None => format!("{}{}", code, grouped_amount(amount)),
    }
}

/// Discount badge percentage: round half-up to the nearest integer.
///
/// Returns 0 when there is no positive discount.
pub fn discount_percent(original: f64, sale: f64) -> u32 {
    if original <= 0.0 || sale >= original {
        return 0;
    }
    ((original - sale) / original * 100.0).round() as u32
}

/// Number rendered without grouping (suffix-symbol currencies).
fn plain_amount(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("{}", amount as i64)
    } else {
        format!("{:.2}", round2(amount))
    }
}

/// Number with thousands-grouped integer part.
fn grouped_amount(amount: f64) -> String {
    let rounded = round2(amount);
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let int_part = abs.trunc() as i64;
    let fract = abs.fract();

    let digits = int_part.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if fract >= 0.005 {
        out.push_str(&format!("{:.2}", fract)[1..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_usd_to_eur() {
        assert_eq!(convert(100.0, "USD", "EUR"), 85.0);
    }

    #[test]
    fn test_convert_same_currency_is_identity() {
        assert_eq!(convert(49.99, "USD", "USD"), 49.99);
    }

    #[test]
    fn test_convert_unknown_code_falls_back_to_reference() {
        // Unknown codes never fail; their rate is treated as 1.
        assert_eq!(convert(100.0, "XYZ", "USD"), 100.0);
        assert_eq!(convert(100.0, "USD", "XYZ"), 100.0);
        assert_eq!(convert(100.0, "EUR", "XYZ"), convert(100.0, "EUR", "USD"));
    }

    #[test]
    fn test_convert_round_trip() {
        // The intermediate 2-decimal rounding loses up to half a cent of
        // the target currency, which is worth most in a PKR -> EUR trip.
        let codes = ["USD", "EUR", "GBP", "PKR", "AED"];
        for from in codes {
            for to in codes {
                let there = convert(1199.0, from, to);
                let back = convert(there, to, from);
                let slack = 0.005 * rate_for(from) / rate_for(to) + 0.01;
                assert!(
                    (back - 1199.0).abs() <= slack,
                    "{from}->{to}: got back {back}"
                );
            }
        }
    }

    #[test]
    fn test_convert_rounds_to_two_places() {
        // 10 / 280 * 0.85 = 0.030357...
        assert_eq!(convert(10.0, "PKR", "EUR"), 0.03);
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_price(1199.0, "USD"), "$1,199");
        assert_eq!(format_price(335720.0, "PKR"), "\u{20a8}335,720");
    }

    #[test]
    fn test_format_fractional() {
        assert_eq!(format_price(49.99, "USD"), "$49.99");
        assert_eq!(format_price(1019.15, "EUR"), "\u{20ac}1,019.15");
    }

    #[test]
    fn test_format_aed_symbol_after_amount() {
        assert_eq!(format_price(367.0, "AED"), "367 \u{062f}.\u{0625}");
    }

    #[test]
    fn test_format_unknown_code_uses_code_as_symbol() {
        assert_eq!(format_price(5.0, "XYZ"), "XYZ5");
    }

    #[test]
    fn test_discount_percent_rounding() {
        // round((1299 - 1199) / 1299 * 100) = round(7.698...) = 8
        assert_eq!(discount_percent(1299.0, 1199.0), 8);
        assert_eq!(discount_percent(399.0, 349.0), 13);
        assert_eq!(discount_percent(699.0, 549.0), 21);
    }

    #[test]
    fn test_discount_percent_no_discount() {
        assert_eq!(discount_percent(100.0, 100.0), 0);
        assert_eq!(discount_percent(100.0, 120.0), 0);
        assert_eq!(discount_percent(0.0, 0.0), 0);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("aed"), Some(Currency::AED));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
