use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses an upstream date string. The upstream mixes RFC 3339 timestamps,
/// zone-less timestamps and bare dates; zone-less values are taken as UTC.
/// Anything else yields `None`.
pub fn parse_upstream_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }

    tracing::debug!(value, "unparseable upstream date");
    None
}
