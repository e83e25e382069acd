mod api;
mod app;
mod config;
mod container;
mod domain;
mod infrastructure;
mod services;
mod telemetry;

use config::{AppConfig, JsonWebTokenConfig};
use container::Container;
use infrastructure::databases::surrealdb;
use services::jsonwebtoken::{JsonWebTokenServiceImpl, KeyPair, TokenLifetimes};
use services::notification::LogCodeSender;

use actix_web::HttpServer;
use chrono::Duration;
use include_dir::{Dir, include_dir};
use std::sync::Arc;
use surrealdb_migrations::MigrationRunner;
use thiserror::Error;
use tracing::{info, warn};

#[cfg(test)]
mod tests;

const MIGRATIONS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/migration");

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Database(#[from] ::surrealdb::Error),
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Migration(String),
    #[error(transparent)]
    Telemetry(#[from] telemetry::TelemetryError),
    #[error("invalid jsonwebtoken settings: {0}")]
    JsonWebToken(&'static str),
}

async fn run() -> Result<(), ServerError> {
    let config = AppConfig::load()?;

    let provider = telemetry::configure(&config.service, &config.logging)?;

    let lifetimes = token_lifetimes(&config.jsonwebtoken)?;
    let keys = signing_keys(&config.jsonwebtoken)?;

    let conn = surrealdb::connect(&config.surrealdb).await?;

    if config.surrealdb.migration {
        MigrationRunner::new(&conn)
            .load_files(&MIGRATIONS_DIR)
            .up()
            .await
            .map_err(|err| ServerError::Migration(err.to_string()))?;
    }

    if config.telegram.secret_service_key.is_empty() {
        warn!("telegram secret service key is empty, telegram sign-in is disabled");
    }

    let container = Arc::new(Container::new(
        conn,
        Arc::new(JsonWebTokenServiceImpl::new(keys, lifetimes)),
        Arc::new(LogCodeSender),
        config.telegram.secret_service_key.clone(),
    ));

    info!(
        host = %config.server.host,
        port = config.server.port,
        "starting http server"
    );

    let server = config.server.clone();

    HttpServer::new(move || app::create(Arc::clone(&container), server.clone()))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    telemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}

fn signing_keys(config: &JsonWebTokenConfig) -> Result<KeyPair, ServerError> {
    if config.secret.trim().is_empty() {
        return Err(ServerError::JsonWebToken("secret must not be empty"));
    }

    Ok(KeyPair::from_secret(config.secret.as_bytes()))
}

fn token_lifetimes(config: &JsonWebTokenConfig) -> Result<TokenLifetimes, ServerError> {
    let days = |value: i64| {
        Duration::try_days(value)
            .filter(|duration| *duration > Duration::zero())
            .ok_or(ServerError::JsonWebToken(
                "token lifetimes must be a positive number of days",
            ))
    };

    Ok(TokenLifetimes {
        access: days(config.access_token_days)?,
        refresh: days(config.refresh_token_days)?,
    })
}
