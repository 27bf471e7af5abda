//! Option pricing
//!
//! Surcharges are encoded in option labels ("加蛋 (+2元)", "Add Egg (+¥2)").
//! Parsing is pure: the same label always yields the same amount, so prices
//! do not depend on render order or on the active language.

use regex::Regex;
use rust_decimal::prelude::*;
use shared::models::OptionValue;
use std::sync::LazyLock;

/// Rounding for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// `+` / `(` / `（`, then either `¥2` or `2元` / `2¥`
static SURCHARGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[+＋(（]\s*(?:[¥￥]\s*(\d+(?:\.\d+)?)|(\d+(?:\.\d+)?)\s*(?:元|[¥￥]))")
        .expect("surcharge pattern is valid")
});

/// Extract the surcharge encoded in an option label.
///
/// No match (or an unparsable number) means a free option: `0`.
pub fn parse_surcharge(label: &str) -> Decimal {
    SURCHARGE_PATTERN
        .captures(label)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .and_then(|m| Decimal::from_str(m.as_str()).ok())
        .unwrap_or(Decimal::ZERO)
}

/// Surcharge of an option value, independent of the active language.
///
/// The zh label is authoritative; the en label is consulted when the zh
/// label carries no amount.
pub fn option_surcharge(value: &OptionValue) -> Decimal {
    let zh = parse_surcharge(&value.label_zh);
    if zh.is_zero() {
        parse_surcharge(&value.label_en)
    } else {
        zh
    }
}

/// Round to 2 decimal places for display / submission
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as yuan: `¥24.00`
pub fn format_price(value: Decimal) -> String {
    format!("¥{:.2}", round_money(value))
}
