//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use exo_config::{ExoConfig, ResultFormat};
use pretty_assertions::assert_eq;

#[test]
fn loads_archive_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[archive]
endpoint = "https://mirror.example/TAP/sync"
format = "csv"
timeout_secs = 45
row_limit = 500
ttl_secs = 120
"#,
        )?;

        let config: ExoConfig = Figment::from(Serialized::defaults(ExoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.archive.endpoint, "https://mirror.example/TAP/sync");
        assert_eq!(config.archive.format, ResultFormat::Csv);
        assert_eq!(config.archive.timeout_secs, 45);
        assert_eq!(config.archive.row_limit, 500);
        assert_eq!(config.archive.ttl_secs, 120);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[apod]
thumbs = false
"#,
        )?;

        let config: ExoConfig = Figment::from(Serialized::defaults(ExoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(!config.apod.thumbs);
        assert_eq!(config.apod.endpoint, "https://api.nasa.gov/planetary/apod");
        assert_eq!(config.apod.ttl_secs, 86_400);
        assert_eq!(config.archive.row_limit, 1000);
        Ok(())
    });
}

#[test]
fn unknown_format_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[archive]
format = "votable"
"#,
        )?;

        let result: Result<ExoConfig, _> =
            Figment::from(Serialized::defaults(ExoConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
