use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { host: "0.0.0.0".to_owned(), port: 3000, site_root: None });
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn overrides_are_applied_and_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", " 127.0.0.1 "), ("PORT", "8080"), ("SITE_ROOT", "dist")]))
        .unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, Some(PathBuf::from("dist")));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("HOST", "  "), ("PORT", ""), ("SITE_ROOT", " ")])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.site_root, None);
}

#[test]
fn invalid_port_is_an_error() {
    for bad in ["abc", "0", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", bad)])).unwrap_err();
        assert!(
            matches!(&err, ServerError::InvalidEnv { var: "PORT", value } if value == bad),
            "unexpected error for {bad:?}: {err}"
        );
    }
}
