//! Lenient date parsing for Baseline and implementation dates.
//!
//! Payloads carry dates as ISO strings, bare years, epoch numbers or
//! `{year, month}` objects depending on the source. Everything is resolved in
//! UTC and reduced to a month granularity label; anything unparseable yields
//! empty parts rather than an error.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::constants::EPOCH_MILLIS_THRESHOLD;
use crate::feature::FeatureRecord;

const MIN_YEAR: i32 = 1000;
const MAX_YEAR: i32 = 9999;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display pair: `label` is `"Month YYYY"`, `year` the bare year.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DateParts {
    pub label: String,
    pub year: String,
}

impl DateParts {
    pub fn from_date(date: NaiveDate) -> Self {
        let month = MONTH_NAMES[date.month0() as usize];
        Self {
            label: format!("{} {}", month, date.year()),
            year: date.year().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_empty()
    }
}

/// Parse any supported date shape into a calendar date.
///
/// Only four-digit years are accepted, so the `year` part is always `YYYY`.
pub fn parse_date(raw: &Value) -> Option<NaiveDate> {
    parse_any(raw).filter(|d| (MIN_YEAR..=MAX_YEAR).contains(&d.year()))
}

fn parse_any(raw: &Value) -> Option<NaiveDate> {
    match raw {
        Value::String(s) => parse_date_str(s.trim()),
        Value::Number(n) => n.as_f64().and_then(parse_epoch),
        Value::Object(map) => {
            let year = map.get("year").and_then(number_like)?;
            let month = match map.get("month") {
                None | Some(Value::Null) => 1.0,
                Some(m) => number_like(m)?,
            };
            if year.fract() != 0.0 || month.fract() != 0.0 || !(1.0..=12.0).contains(&month) {
                return None;
            }
            NaiveDate::from_ymd_opt(year as i32, month as u32, 1)
        }
        _ => None,
    }
}

/// Label/year for a raw date value; empty parts when unparseable.
pub fn date_parts(raw: Option<&Value>) -> DateParts {
    raw.and_then(parse_date)
        .map(DateParts::from_date)
        .unwrap_or_default()
}

/// Date parts for the record's Baseline low date.
pub fn baseline_date(feature: &FeatureRecord) -> DateParts {
    date_parts(feature.baseline.low_date.as_ref())
}

/// Most recent successfully parsed per-browser implementation date.
pub fn latest_implementation_date(feature: &FeatureRecord) -> DateParts {
    feature
        .browser_implementations
        .iter()
        .filter_map(|(_, imp)| imp.date.as_ref().and_then(parse_date))
        .max()
        .map(DateParts::from_date)
        .unwrap_or_default()
}

// Date-time shapes without a zone; read as UTC like `Date.parse` on a bare date.
const NAIVE_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const ZONED_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
];

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc().date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    // `Z` is UTC, which is how zone-less values are read anyway
    let naive = s.strip_suffix(['Z', 'z']).unwrap_or(s);
    if let Some(dt) = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(naive, fmt).ok())
    {
        return Some(dt.date());
    }
    if let Some(dt) = ZONED_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.naive_utc().date());
    }
    if s.len() == 7 {
        if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
            return Some(d);
        }
    }
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse().ok().and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1));
    }
    None
}

fn parse_epoch(n: f64) -> Option<NaiveDate> {
    if !n.is_finite() {
        return None;
    }
    let millis = if n < EPOCH_MILLIS_THRESHOLD { n * 1000.0 } else { n };
    DateTime::from_timestamp_millis(millis.round() as i64).map(|dt| dt.date_naive())
}

fn number_like(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn month_granularity_strings() {
        assert_eq!(date_parts(Some(&json!("2023-07"))).label, "July 2023");
        assert_eq!(
            date_parts(Some(&json!("2020-02-29T23:59:59Z"))).label,
            "February 2020"
        );
    }

    #[test]
    fn out_of_range_month_is_rejected() {
        assert!(date_parts(Some(&json!({"year": 2024, "month": 13}))).is_empty());
        assert!(date_parts(Some(&json!({"year": 2024, "month": 0}))).is_empty());
    }
}
