use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::telegram::TelegramLink;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::domain::repositories::telegram::TelegramLinkRepository;
use crate::infrastructure::models::telegram::SurrealTelegramLink;

pub struct TelegramLinkRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl TelegramLinkRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const CONTACT: &str = "contact";

#[async_trait]
impl TelegramLinkRepository for TelegramLinkRepositoryImpl {
    async fn find_user_id(&self, telegram_id: &str) -> RepositoryResult<Option<i64>> {
        let user_id: Option<i64> = self
            .db
            .query(
                "SELECT VALUE user_id FROM type::table($table) WHERE telegram_id = type::string($telegram_id) LIMIT 1",
            )
            .bind(("table", CONTACT))
            .bind(("telegram_id", telegram_id.to_owned()))
            .await?
            .take(0)?;

        Ok(user_id)
    }

    async fn link(&self, link: TelegramLink) -> RepositoryResult<()> {
        let created: Option<SurrealTelegramLink> = self
            .db
            .create(CONTACT)
            .content(SurrealTelegramLink::from(link))
            .await?;

        created
            .map(|_| ())
            .ok_or(RepositoryError::MissingRecord(CONTACT))
    }
}
