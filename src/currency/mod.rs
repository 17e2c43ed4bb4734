//! Currency display helpers: symbol lookup and amount formatting.
//!
//! Formatting only. Conversion between currencies is out of scope; amounts
//! are assumed to already be in the caller's display currency.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::CurrencyDisplay;

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

static SYMBOLS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("USD", "$"),
        ("EUR", "\u{20ac}"),
        ("GBP", "\u{a3}"),
        ("JPY", "\u{a5}"),
        ("CHF", "CHF"),
        ("CAD", "CA$"),
        ("AUD", "A$"),
        ("SEK", "kr"),
        ("NOK", "kr"),
        ("DKK", "kr"),
        ("PLN", "z\u{142}"),
        ("BRL", "R$"),
        ("INR", "\u{20b9}"),
        ("CNY", "\u{a5}"),
        ("KRW", "\u{20a9}"),
    ])
});

/// Returns the display symbol for a currency code, if one is known.
pub fn symbol_for(code: &str) -> Option<&'static str> {
    SYMBOLS.get(code.to_uppercase().as_str()).copied()
}

/// Formats a signed amount for display.
///
/// Symbol mode yields `"$1,500.00"` (or `"-$1,500.00"`); code mode yields
/// `"1,500.00 USD"`. Unknown codes fall back to code mode.
pub fn format_amount(amount: f64, code: &str, display: CurrencyDisplay) -> String {
    let magnitude = group_thousands(amount.abs());
    let sign = if amount < 0.0 { "-" } else { "" };
    match display {
        CurrencyDisplay::Symbol => match symbol_for(code) {
            Some(symbol) => format!("{sign}{symbol}{magnitude}"),
            None => format!("{sign}{magnitude} {}", code.to_uppercase()),
        },
        CurrencyDisplay::Code => format!("{sign}{magnitude} {}", code.to_uppercase()),
    }
}

fn group_thousands(value: f64) -> String {
    let raw = format!("{value:.2}");
    let (integer, fraction) = raw.split_once('.').unwrap_or((raw.as_str(), "00"));
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    let digits = integer.as_bytes();
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }
    format!("{grouped}.{fraction}")
}
