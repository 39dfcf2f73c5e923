use super::*;

#[test]
fn arrows_follow_scroll_position() {
    assert_eq!(arrow_visibility(0.0, 1800.0, 600.0), (false, true));
    assert_eq!(arrow_visibility(300.0, 1800.0, 600.0), (true, true));
    assert_eq!(arrow_visibility(1200.0, 1800.0, 600.0), (true, false));
}

#[test]
fn no_arrows_when_everything_fits() {
    assert_eq!(arrow_visibility(0.0, 600.0, 600.0), (false, false));
}

#[test]
fn feature_cards_link_to_site_pages() {
    let routes = ["/menu", "/information", "/bar-map", "/about"];
    assert!(FEATURES.iter().all(|card| routes.contains(&card.href)));
    assert_eq!(FEATURES.len(), 6);
}
