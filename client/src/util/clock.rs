//! Current time and local offset.
//!
//! Browser builds read `js_sys::Date`; server renders use the system clock at
//! UTC, since the visitor's zone is unknown until hydration. Labels stay on UTC
//! until the view has mounted so the hydrated markup matches the server's.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(feature = "hydrate"))]
    {
        assistant::clock::now_ms()
    }
}

/// Minutes east of UTC for the visitor's locale.
pub fn utc_offset_minutes() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        // JS reports minutes *west* of UTC.
        #[allow(clippy::cast_possible_truncation)]
        let west = js_sys::Date::new_0().get_timezone_offset() as i32;
        -west
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// `HH:MM` label for a message timestamp.
///
/// UTC until `mounted`, then the visitor's local time.
pub fn time_label(timestamp_ms: i64, mounted: bool) -> String {
    let offset = if mounted { utc_offset_minutes() } else { 0 };
    assistant::clock::format_clock(timestamp_ms, offset)
}
