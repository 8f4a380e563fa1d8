//! Price Helpers
//!
//! Parsing follows the browser's `parseFloat`: the longest numeric prefix
//! wins, so `"12abc"` reads as 12 and `"abc"` does not parse at all.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{trim_field, DishEntry};

static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("numeric prefix pattern is valid")
});

/// Parse the leading float of `raw`; `None` when there is none
pub fn parse_price(raw: &str) -> Option<f64> {
    let text = trim_field(raw);
    let prefix = NUMERIC_PREFIX.find(text)?.as_str();

    let (negative, unsigned) = match prefix.as_bytes().first() {
        Some(b'-') => (true, &prefix[1..]),
        Some(b'+') => (false, &prefix[1..]),
        _ => (false, prefix),
    };
    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        unsigned.parse::<f64>().ok()?
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Two-decimal display; anything unparsable shows as `0.00`
pub fn format_price(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{:.2}", value),
        _ => "0.00".to_string(),
    }
}

/// Sum of the prices that already read as positive numbers
pub fn order_total(dishes: &[DishEntry]) -> f64 {
    dishes
        .iter()
        .filter_map(|dish| parse_price(&dish.price))
        .filter(|price| price.is_finite() && *price > 0.0)
        .sum()
}
