use sqlx::postgres::{PgConnectOptions, PgSslMode};

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
    pub max_connections: u32,
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database_name)
            .ssl_mode(PgSslMode::Prefer)
    }
}

/// Loads `.env` into the process environment; a missing file is fine.
pub fn load_env() {
    dotenvy::dotenv().ok();
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    load_env();

    // Defaults first, then `configuration.yaml` (optional), then APP_* variables,
    // e.g. APP_DATABASE__HOST=db
    let settings = config::Config::builder()
        .set_default("app_host", "0.0.0.0")?
        .set_default("app_port", 8000)?
        .set_default("database.username", "postgres")?
        .set_default("database.password", "postgres")?
        .set_default("database.host", "localhost")?
        .set_default("database.port", 5432)?
        .set_default("database.database_name", "chatlog")?
        .set_default("database.max_connections", 5)?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;

    // PORT wins over everything else
    if let Ok(port) = std::env::var("PORT") {
        config.app_port = parse_port(&port)?;
    }

    Ok(config)
}

fn parse_port(value: &str) -> Result<u16, config::ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|err| config::ConfigError::Message(format!("invalid PORT {:?}: {}", value, err)))
}
