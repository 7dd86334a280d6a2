//! Short date labels for tiles and cards.

use chrono::{DateTime, Local, TimeZone, Utc};

/// "Oct 17" in local time
#[must_use]
pub fn short_date(timestamp_ms: i64) -> String {
    short_date_in(timestamp_ms, &Local)
}

/// "Oct 17, 14:05" in local time
#[must_use]
pub fn short_date_time(timestamp_ms: i64) -> String {
    short_date_time_in(timestamp_ms, &Local)
}

/// [`short_date`] for an explicit time zone
#[must_use]
pub fn short_date_in<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    to_zone(timestamp_ms, tz).format("%b %-d").to_string()
}

/// [`short_date_time`] for an explicit time zone
#[must_use]
pub fn short_date_time_in<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    to_zone(timestamp_ms, tz).format("%b %-d, %H:%M").to_string()
}

fn to_zone<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> DateTime<Tz> {
    // Out-of-range timestamps clamp to the epoch rather than failing the render.
    let utc = DateTime::<Utc>::from_timestamp_millis(timestamp_ms).unwrap_or_default();
    utc.with_timezone(tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    // 2026-10-17T14:05:00Z
    const STAMP: i64 = 1_792_245_900_000;

    #[test]
    fn formats_month_and_day() {
        assert_eq!(short_date_in(STAMP, &Utc), "Oct 17");
    }

    #[test]
    fn formats_time_in_zone() {
        assert_eq!(short_date_time_in(STAMP, &Utc), "Oct 17, 14:05");
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(short_date_time_in(STAMP, &tokyo), "Oct 17, 23:05");
    }

    #[test]
    fn day_has_no_padding() {
        // 2026-03-05T00:00:00Z
        assert_eq!(short_date_in(1_772_668_800_000, &Utc), "Mar 5");
    }
}
