//! Values from a `.env` file flow through the env provider.

use std::io::Write;

use exo_config::{ExoConfig, ResultFormat};
use figment::Jail;

fn write_env_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn dotenv_file_supplies_api_key_and_archive_settings() {
    let env_file = write_env_file(
        "EXODASH_APOD__API_KEY=from-dotenv\nEXODASH_ARCHIVE__FORMAT=csv\nEXODASH_ARCHIVE__ROW_LIMIT=50\n",
    );

    Jail::expect_with(|jail| {
        // Route through the jail so the variables are restored afterwards.
        for item in dotenvy::from_path_iter(env_file.path()).unwrap() {
            let (key, value) = item.unwrap();
            jail.set_env(key, value);
        }
        let config = ExoConfig::load().unwrap();
        assert_eq!(config.apod.api_key, "from-dotenv");
        assert!(config.apod.is_configured());
        assert_eq!(config.archive.format, ResultFormat::Csv);
        assert_eq!(config.archive.row_limit, 50);
        Ok(())
    });
}

#[test]
fn process_env_wins_over_dotenv_file() {
    let env_file = write_env_file("EXODASH_APOD__API_KEY=from-dotenv\n");

    Jail::expect_with(|jail| {
        jail.set_env("EXODASH_APOD__API_KEY", "from-shell");
        dotenvy::from_path(env_file.path()).unwrap();
        let config = ExoConfig::load().unwrap();
        assert_eq!(config.apod.api_key, "from-shell");
        Ok(())
    });
}
