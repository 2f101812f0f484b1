//! Message timestamps.
//!
//! In the browser the local wall clock comes from `js_sys::Date`, so the
//! host's time zone applies. Elsewhere UTC from `SystemTime` is used.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Format a 24-hour `HH:MM` label.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours % 24, minutes % 60)
}

/// Current local time as `HH:MM`.
pub fn now_hhmm() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        format_clock(now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        hhmm_from_unix_secs(secs)
    }
}

#[cfg(any(test, not(feature = "csr")))]
fn hhmm_from_unix_secs(secs: u64) -> String {
    let minute_of_day = (secs / 60) % (24 * 60);
    // Bounded by 1440, so the casts cannot truncate.
    #[allow(clippy::cast_possible_truncation)]
    format_clock((minute_of_day / 60) as u32, (minute_of_day % 60) as u32)
}
