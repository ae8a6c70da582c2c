use super::*;

/// # Safety
/// Only `from_env_defaults_then_overrides` mutates these variables.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("TESTGEN_API_BASE_URL");
    }
}

#[test]
fn from_env_defaults_then_overrides() {
    unsafe { clear_server_env() };

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, "http://localhost:5000");

    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("TESTGEN_API_BASE_URL", "https://generator.example.test/");
    }

    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_base_url, "https://generator.example.test");

    unsafe {
        std::env::set_var("PORT", "not-a-port");
    }
    assert_eq!(ServerConfig::from_env(), Err(ConfigError::InvalidPort("not-a-port".to_owned())));

    unsafe { clear_server_env() };
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(Some("abc")), Err(ConfigError::InvalidPort("abc".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

#[test]
fn parse_port_blank_is_default() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}

#[test]
fn parse_base_url_requires_http_scheme() {
    let err = parse_base_url(Some("localhost:5000")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("localhost:5000".to_owned()));
    assert!(err.to_string().contains("expected http:// or https://"));
}

#[test]
fn parse_base_url_accepts_loopback_and_hosted() {
    assert_eq!(parse_base_url(Some("http://127.0.0.1:5000")).unwrap(), "http://127.0.0.1:5000");
    assert_eq!(
        parse_base_url(Some("https://api.example.test//")).unwrap(),
        "https://api.example.test"
    );
}
