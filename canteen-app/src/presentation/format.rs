//! Display formatting helpers

use crate::i18n::LocalizationTable;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use shared::DisplayLanguage;

/// `520 大卡` / `520 kcal`, or `--` when unknown
pub fn format_calories(calories: Option<f64>, lang: DisplayLanguage, table: &LocalizationTable) -> String {
    match calories.filter(|c| c.is_finite() && *c > 0.0) {
        Some(c) if c.fract() == 0.0 => format!("{c:.0} {}", table.ui("kcal", lang)),
        Some(c) => format!("{c} {}", table.ui("kcal", lang)),
        None => "--".to_string(),
    }
}

/// Calendar date (`YYYY-MM-DD`) of a server timestamp.
///
/// Unparsable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().to_string();
    }
    for pattern in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.date().to_string();
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Average score to one decimal, `N/A` when absent
pub fn format_score(score: Option<f64>) -> String {
    match score.filter(|s| s.is_finite()) {
        Some(s) => format!("{s:.1}"),
        None => "N/A".to_string(),
    }
}
