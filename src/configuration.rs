use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub path: String,
    pub create_if_missing: bool,
}

impl DatabaseSettings {
    pub fn with_db(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(self.create_if_missing)
            .journal_mode(SqliteJournalMode::Wal)
    }
}

/// Defaults, then `configuration.yaml` if present. The storage location can
/// also come from `APP_DATABASE__PATH`; nothing else is read from the env.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    build_configuration(std::env::var("APP_DATABASE__PATH").ok())
}

fn build_configuration(database_path: Option<String>) -> Result<Settings, config::ConfigError> {
    config::Config::builder()
        .set_default("application.host", "127.0.0.1")?
        .set_default("application.port", 8000)?
        .set_default("database.path", "./test.db")?
        .set_default("database.create_if_missing", true)?
        .add_source(config::File::new("configuration.yaml", config::FileFormat::Yaml).required(false))
        .set_override_option("database.path", database_path)?
        .build()?
        .try_deserialize::<Settings>()
}
