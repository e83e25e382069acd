use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub server: ServerConfig,
    pub surrealdb: SurrealDbConfig,
    pub jsonwebtoken: JsonWebTokenConfig,
    pub telegram: TelegramConfig,
}

/// Key shared with the Telegram bot. Sign-in is rejected while it is empty.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct TelegramConfig {
    pub secret_service_key: String,
}

/// Signing secret and default lifetimes of issued tokens.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct JsonWebTokenConfig {
    pub secret: String,
    pub access_token_days: i64,
    pub refresh_token_days: i64,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    pub otlp: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub public_url: String,
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SurrealDbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub namespace: String,
    pub database: String,
    pub migration: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(AppConfig {
                service: ServiceConfig {
                    name: "auth-server".to_string(),
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                    otlp: false,
                },
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 8000,
                    public_url: "http://localhost:8000".to_string(),
                    allowed_origins: vec!["http://localhost:8000".to_string()],
                },
                jsonwebtoken: JsonWebTokenConfig {
                    secret: String::new(),
                    access_token_days: 365,
                    refresh_token_days: 365 * 2,
                },
                telegram: TelegramConfig {
                    secret_service_key: String::new(),
                },
                surrealdb: SurrealDbConfig {
                    host: "localhost".to_string(),
                    port: 8080,
                    username: "root".to_string(),
                    password: "root".to_string(),
                    namespace: "auth".to_string(),
                    database: "auth".to_string(),
                    migration: true,
                },
            }))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
            .extract()
    }
}
