use super::*;

#[test]
fn epoch_is_1970() {
    assert_eq!(year_from_unix_secs(0), 1970);
}

#[test]
fn year_boundaries() {
    // 2024-12-31T23:59:59Z and 2025-01-01T00:00:00Z
    assert_eq!(year_from_unix_secs(1_735_689_599), 2024);
    assert_eq!(year_from_unix_secs(1_735_689_600), 2025);
}

#[test]
fn leap_day_and_march() {
    // 2024-02-29T12:00:00Z and 2024-03-01T00:00:00Z
    assert_eq!(year_from_unix_secs(1_709_208_000), 2024);
    assert_eq!(year_from_unix_secs(1_709_251_200), 2024);
}

#[test]
fn before_epoch() {
    // 1969-12-31T23:59:59Z
    assert_eq!(year_from_unix_secs(-1), 1969);
}

#[test]
fn current_year_is_plausible() {
    assert!(current_year() >= 2025);
}
