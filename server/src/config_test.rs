use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

const REQUIRED: [(&str, &str); 2] = [("BACKEND_URL", "https://bar.example.test/"), ("BACKEND_ANON_KEY", "anon")];

#[test]
fn defaults_apply_when_only_required_vars_set() {
    let cfg = ServerConfig::from_lookup(lookup(&REQUIRED)).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.backend.url, "https://bar.example.test");
    assert_eq!(cfg.backend.anon_key, "anon");
    assert_eq!(
        cfg.backend.timeouts,
        BackendTimeouts {
            request_secs: DEFAULT_BACKEND_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_BACKEND_CONNECT_TIMEOUT_SECS,
        }
    );
}

#[test]
fn overrides_are_parsed() {
    let mut pairs = REQUIRED.to_vec();
    pairs.extend([
        ("PORT", "8080"),
        ("SITE_ROOT", "target/site"),
        ("BACKEND_REQUEST_TIMEOUT_SECS", "5"),
        ("BACKEND_CONNECT_TIMEOUT_SECS", " 2 "),
    ]);
    let cfg = ServerConfig::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root.as_deref(), Some("target/site"));
    assert_eq!(cfg.backend.timeouts.request(), Duration::from_secs(5));
    assert_eq!(cfg.backend.timeouts.connect(), Duration::from_secs(2));
}

#[test]
fn missing_backend_url_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("BACKEND_ANON_KEY", "anon")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("BACKEND_URL"));
}

#[test]
fn blank_anon_key_counts_as_missing() {
    let err =
        ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "https://x.test"), ("BACKEND_ANON_KEY", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("BACKEND_ANON_KEY"));
}

#[test]
fn malformed_port_is_rejected() {
    let mut pairs = REQUIRED.to_vec();
    pairs.push(("PORT", "eighty"));
    let err = ServerConfig::from_lookup(lookup(&pairs)).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert!(err.to_string().contains("PORT"));
}
