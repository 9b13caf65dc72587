//! Charm-price formatting.
//!
//! Raw catalog prices are free text (`"$49.99"`, `"$10 to $20"`,
//! `"From 12 USD"`). Display prices are normalized to the nearest whole
//! dollar minus one cent, never below `$0.99`:
//!
//! ```rust
//! use storefront_catalog::price::format_usd_price;
//!
//! assert_eq!(format_usd_price("$49.99"), "$49.99");
//! assert_eq!(format_usd_price("$10 to $20"), "$9.99 to $19.99");
//! assert_eq!(format_usd_price("$0.20"), "$0.99");
//! assert_eq!(format_usd_price("Free"), "Free");
//! ```
//!
//! A range is detected with a plain substring check for `"to"`, so any raw
//! string containing those two letters (e.g. `"Photo pack 5, 8"`) and at least
//! two numbers is formatted as a range.

use std::sync::LazyLock;

use regex::Regex;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("Invalid price number regex"));

/// Floor applied after the one-cent charm adjustment.
const MIN_CHARM_PRICE: f64 = 0.99;

/// Format a single amount as a charm price.
///
/// Rounds half-up to a whole dollar, subtracts one cent, and clamps to
/// `$0.99`.
///
/// ```rust
/// use storefront_catalog::price::charm_price;
///
/// assert_eq!(charm_price(49.5), "$49.99");
/// assert_eq!(charm_price(49.49), "$48.99");
/// assert_eq!(charm_price(0.0), "$0.99");
/// ```
pub fn charm_price(value: f64) -> String {
    let rounded = (value + 0.5).floor();
    let neat = (rounded - 0.01).max(MIN_CHARM_PRICE);
    format!("${neat:.2}")
}

/// Normalize a raw price string for display.
///
/// Returns `raw` unchanged when it contains no number.
pub fn format_usd_price(raw: &str) -> String {
    let numbers: Vec<f64> = NUMBER_RE
        .find_iter(raw)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect();

    match numbers.as_slice() {
        [] => raw.to_string(),
        [low, high, ..] if raw.contains("to") => {
            format!("{} to {}", charm_price(*low), charm_price(*high))
        }
        [first, ..] => charm_price(*first),
    }
}

/// Format an optional raw price; an absent price renders as empty text.
pub fn format_optional_price(raw: Option<&str>) -> String {
    raw.map(format_usd_price).unwrap_or_default()
}
