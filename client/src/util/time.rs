//! Calendar helpers.
//!
//! Server and browser must render the same footer year, so both derive it
//! from a Unix timestamp with the same arithmetic.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

const SECS_PER_DAY: i64 = 86_400;

/// Gregorian year containing `secs` seconds since the Unix epoch (UTC).
#[must_use]
pub fn year_from_unix_secs(secs: i64) -> i64 {
    // Days-to-civil conversion on 400-year eras, with years starting in March.
    let days = secs.div_euclid(SECS_PER_DAY) + 719_468;
    let era = days.div_euclid(146_097);
    let day_of_era = days.rem_euclid(146_097);
    let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_index = (5 * day_of_year + 2) / 153;
    let year = year_of_era + era * 400;
    if month_index >= 10 { year + 1 } else { year }
}

/// The current year, read from the browser clock when hydrated and the system clock otherwise.
#[must_use]
pub fn current_year() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        year_from_unix_secs(secs)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX));
        year_from_unix_secs(secs)
    }
}
