use super::*;

#[test]
fn defaults_resolve_without_any_input() {
    let settings = Settings::from_raw(RawSettings::default()).expect("defaults are valid");

    assert_eq!(settings.server.addr.port(), DEFAULT_PORT);
    assert_eq!(
        settings.server.graceful_shutdown,
        Duration::from_secs(DEFAULT_GRACEFUL_SHUTDOWN_SECS)
    );
    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
    assert!(settings.database.url.is_none());
    assert_eq!(
        settings.database.max_connections.get(),
        DEFAULT_DB_MAX_CONNECTIONS
    );
    assert!(settings.cache.url.is_none());
    assert!(settings.cors.allowed_origins.is_empty());
}

#[test]
fn zero_port_is_rejected() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(0);

    let err = Settings::from_raw(raw).expect_err("zero port is invalid");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "server.port",
            ..
        }
    ));
}

#[test]
fn zero_pool_size_is_rejected() {
    let mut raw = RawSettings::default();
    raw.database.max_connections = Some(0);

    let err = Settings::from_raw(raw).expect_err("zero pool size is invalid");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "database.max_connections",
            ..
        }
    ));
}

#[test]
fn invalid_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("chatty".to_string());

    let err = Settings::from_raw(raw).expect_err("unknown level is invalid");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "logging.level",
            ..
        }
    ));
}

#[test]
fn blank_urls_are_treated_as_unset() {
    let mut raw = RawSettings::default();
    raw.database.url = Some("   ".to_string());
    raw.cache.url = Some("".to_string());

    let settings = Settings::from_raw(raw).expect("blank urls are tolerated");
    assert!(settings.database.url.is_none());
    assert!(settings.cache.url.is_none());
}

#[test]
fn serve_overrides_take_precedence() {
    let mut raw = RawSettings::default();
    raw.server.port = Some(3000);
    raw.logging.json = Some(false);

    raw.apply_serve_overrides(&ServeOverrides {
        server_port: Some(9000),
        log_json: Some(true),
        database_url: Some("postgres://db/sakaya".to_string()),
        cache_url: Some("redis://cache:6379".to_string()),
        ..Default::default()
    });

    let settings = Settings::from_raw(raw).expect("overridden settings are valid");
    assert_eq!(settings.server.addr.port(), 9000);
    assert!(matches!(settings.logging.format, LogFormat::Json));
    assert_eq!(settings.database.url.as_deref(), Some("postgres://db/sakaya"));
    assert_eq!(settings.cache.url.as_deref(), Some("redis://cache:6379"));
}

#[test]
fn wildcard_origin_allows_anything() {
    let cors = CorsSettings {
        allowed_origins: vec!["*".to_string()],
        ..Default::default()
    };
    assert!(cors.allows_origin("https://example.com"));
}

#[test]
fn origin_matching_is_exact_and_case_insensitive() {
    let cors = CorsSettings {
        allowed_origins: vec!["http://localhost:3000".to_string()],
        ..Default::default()
    };
    assert!(cors.allows_origin("http://localhost:3000"));
    assert!(cors.allows_origin("HTTP://LOCALHOST:3000"));
    assert!(!cors.allows_origin("http://localhost:3001"));
    assert!(!cors.allows_origin("https://example.com"));
}
