use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

pub fn now_millis() -> i64 {
    Local::now().timestamp_millis()
}

pub fn millis_to_local(millis: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(millis).single()
}

/// Parse a user supplied date into epoch millis (local time).
///
/// Accepted forms:
/// - `YYYY-MM-DD`          → midnight of that day
/// - `YYYY-MM-DD HH:MM`
/// - `YYYY-MM-DDTHH:MM:SS` (RFC 3339 without offset)
/// - `now` / `today`
pub fn parse_to_millis(input: &str) -> Result<i64, String> {
    let s = input.trim();

    if s.eq_ignore_ascii_case("now") {
        return Ok(now_millis());
    }
    if s.eq_ignore_ascii_case("today") {
        let midnight = Local::now().date_naive().and_hms_opt(0, 0, 0);
        return midnight
            .and_then(local_millis)
            .ok_or_else(|| input.trim().to_string());
    }

    for fmt in ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return local_millis(dt).ok_or_else(|| input.trim().to_string());
        }
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d
            .and_hms_opt(0, 0, 0)
            .and_then(local_millis)
            .ok_or_else(|| input.trim().to_string());
    }

    Err(input.trim().to_string())
}

// DST gaps have no local representation; ambiguous times take the earlier one
fn local_millis(dt: NaiveDateTime) -> Option<i64> {
    Local
        .from_local_datetime(&dt)
        .earliest()
        .map(|d| d.timestamp_millis())
}
