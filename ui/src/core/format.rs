//! Formatting helpers for presenting trip values.
//!
//! Every helper takes an optional value and returns a display string, falling
//! back to an em-dash when the value is missing or not representable.

use std::fmt::Display;

use time::{
    format_description::well_known::Rfc2822, macros::format_description, OffsetDateTime,
    PrimitiveDateTime, Time,
};

/// Placeholder rendered for missing values.
pub const EMPTY: &str = "—";

pub fn format_decimal(value: Option<f64>, places: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.places$}"),
        _ => EMPTY.to_string(),
    }
}

pub fn format_money(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("${v:.2}"),
        _ => EMPTY.to_string(),
    }
}

pub fn format_optional<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| EMPTY.to_string())
}

/// `Jan 5, 14:30` style label, or an em-dash when absent or unparseable.
pub fn format_timestamp(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(format_datetime)
        .unwrap_or_else(|| EMPTY.to_string())
}

pub fn format_datetime(value: PrimitiveDateTime) -> String {
    value
        .format(&format_description!(
            "[month repr:short] [day padding:none], [hour]:[minute]"
        ))
        .unwrap_or_else(|_| EMPTY.to_string())
}

/// Same label for a millisecond epoch value (chart axes and tooltips).
pub fn format_epoch_ms(ms: f64) -> String {
    if !ms.is_finite() {
        return EMPTY.to_string();
    }
    OffsetDateTime::from_unix_timestamp_nanos((ms as i128) * 1_000_000)
        .map(|ts| format_datetime(PrimitiveDateTime::new(ts.date(), ts.time())))
        .unwrap_or_else(|_| EMPTY.to_string())
}

/// Parse the timestamp shapes the trips endpoint emits.
///
/// Accepts `YYYY-MM-DD HH:MM[:SS]`, the `T`-separated ISO form (fractional
/// seconds and offsets are ignored, the wall-clock value is kept), a bare date,
/// and RFC 2822 (`Fri, 05 Jan 2024 14:30:00 GMT`).
pub fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let rfc2822 = raw
        .strip_suffix(" GMT")
        .map(|head| format!("{head} +0000"))
        .unwrap_or_else(|| raw.to_string());
    if let Ok(ts) = OffsetDateTime::parse(&rfc2822, &Rfc2822) {
        return Some(PrimitiveDateTime::new(ts.date(), ts.time()));
    }

    let normalized: String = raw
        .chars()
        .enumerate()
        .map(|(idx, ch)| if idx == 10 && ch == 'T' { ' ' } else { ch })
        .collect();

    if let Some(prefix) = normalized.get(..19) {
        if let Ok(ts) = PrimitiveDateTime::parse(
            prefix,
            &format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        ) {
            return Some(ts);
        }
    }

    if let Some(prefix) = normalized.get(..16) {
        if let Ok(ts) = PrimitiveDateTime::parse(
            prefix,
            &format_description!("[year]-[month]-[day] [hour]:[minute]"),
        ) {
            return Some(ts);
        }
    }

    normalized
        .get(..10)
        .filter(|_| normalized.len() == 10)
        .and_then(|date| {
            time::Date::parse(date, &format_description!("[year]-[month]-[day]")).ok()
        })
        .map(|date| PrimitiveDateTime::new(date, Time::MIDNIGHT))
}

/// Milliseconds since the epoch, treating the wall-clock value as UTC.
pub fn timestamp_epoch_ms(raw: &str) -> Option<f64> {
    parse_timestamp(raw).map(|ts| (ts.assume_utc().unix_timestamp_nanos() / 1_000_000) as f64)
}

/// Escape the five HTML metacharacters.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}
