
pub mod utils;

use ::surrealdb::{Surreal, engine::remote::ws::Client};

use crate::services::notification::mock::CodeSenderImpl;
use crate::tests::utils::keys::{TELEGRAM_SERVICE_KEY, jsonwebtoken_service};
use std::sync::Arc;

use serde::Deserialize;
use surrealdb_migrations::MigrationRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::{
    surrealdb::{SURREALDB_PORT, SurrealDb},
    testcontainers::runners::AsyncRunner,
};

use crate::{MIGRATIONS_DIR, infrastructure::databases::surrealdb};
use crate::config::{AppConfig, ServerConfig};
use crate::container::Container;

use rstest::*;

struct Database {
    pub connection: Surreal<Client>,
    pub container: ContainerAsync<SurrealDb>,
}

pub struct TestContext {
    pub db: Database,
    pub container: Arc<Container>,
    pub sender: Arc<CodeSenderImpl>,
    pub server: ServerConfig,
}

#[fixture]
async fn context() -> TestContext {
    let db_container = SurrealDb::default()
        .with_tag("latest")
        .start()
        .await
        .unwrap();

    let mut config = AppConfig::load().unwrap();

    config.surrealdb.port = db_container
        .get_host_port_ipv4(SURREALDB_PORT)
        .await
        .unwrap();

    let db_connection = surrealdb::connect(&config.surrealdb).await.unwrap();

    let _ = MigrationRunner::new(&db_connection)
        .load_files(&MIGRATIONS_DIR)
        .up()
        .await;

    let db = Database {
        connection: db_connection.clone(),
        container: db_container,
    };

    let sender = Arc::new(CodeSenderImpl::default());

    let container = Arc::new(Container::new(
        db_connection,
        Arc::new(jsonwebtoken_service()),
        sender.clone(),
        TELEGRAM_SERVICE_KEY.to_string(),
    ));

    TestContext {
        db,
        container,
        sender,
        server: config.server,
    }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    code: u16,
    message: String,
}
