//! Wall-clock formatting for message timestamps.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

const MS_PER_MINUTE: i64 = 60_000;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Milliseconds since the Unix epoch from the system clock.
///
/// Not for `wasm32-unknown-unknown`, where `SystemTime::now` panics; browser
/// code reads `js_sys::Date` instead.
#[must_use]
pub fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
}

/// Format a Unix-epoch millisecond timestamp as zero-padded 24h `HH:MM`
/// at the given UTC offset (minutes east of UTC).
#[must_use]
pub fn format_clock(timestamp_ms: i64, utc_offset_minutes: i32) -> String {
    let minutes = timestamp_ms.div_euclid(MS_PER_MINUTE) + i64::from(utc_offset_minutes);
    let of_day = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", of_day / 60, of_day % 60)
}
