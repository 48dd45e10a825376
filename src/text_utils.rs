use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Parses an upload timestamp such as `2024-06-01T10:00:00+01:00`.
pub fn parse_uploaded(buf: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(buf.trim()).ok()
}

/// Age of a post in the short form shown on the listing page.
/// Past a day it is whole days (`3d`), otherwise `2h5m0s`, `4m10s` or `9s`.
pub fn format_age(age: TimeDelta) -> String {
    let secs = age.num_seconds().max(0);

    if secs > SECS_PER_DAY {
        // Rounded to the nearest day
        let days = (secs + SECS_PER_DAY / 2) / SECS_PER_DAY;
        return format!("{}d", days);
    }

    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    match (h, m) {
        (0, 0) => format!("{}s", s),
        (0, _) => format!("{}m{}s", m, s),
        _ => format!("{}h{}m{}s", h, m, s),
    }
}

/// Display string for the "last updated" field, empty when the timestamp is malformed.
pub fn format_last_updated(uploaded: &str, now: DateTime<Utc>) -> String {
    match parse_uploaded(uploaded) {
        Some(date_time) => format_age(now.signed_duration_since(date_time)),
        None => String::new(),
    }
}

/// ASCII, lower case, dash separated form of a title. `Crème Brûlée!` becomes `creme-brulee`.
pub fn slug(title: &str) -> String {
    let ascii = unidecode::unidecode(title);
    let mut slug = String::with_capacity(ascii.len());
    let mut prev_dash = true;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}
