use super::*;

#[test]
fn active_link_matches_exact_path() {
    assert!(is_active("/menu", "/menu"));
    assert!(!is_active("/menu/extra", "/menu"));
    assert!(!is_active("/menu", "/"));
}

#[test]
fn header_turns_solid_after_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(10.0));
    assert!(is_scrolled(10.5));
    assert_eq!(header_class(true), "navbar navbar--scrolled");
    assert_eq!(header_class(false), "navbar");
}

#[test]
fn every_route_is_linked_once() {
    let mut hrefs: Vec<&str> = MAIN_LINKS.iter().chain(MORE_LINKS.iter()).map(|l| l.href).collect();
    let total = hrefs.len();
    hrefs.sort_unstable();
    hrefs.dedup();
    assert_eq!(hrefs.len(), total);
    assert_eq!(total, 7);
}
