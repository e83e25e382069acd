use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::refresh_token::{CreateRefreshToken, RefreshToken};
use crate::domain::repositories::refresh_token::RefreshTokenRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::refresh_token::{
    SurrealRefreshToken, SurrealRefreshTokenCreate,
};

pub struct RefreshTokenRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl RefreshTokenRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const REFRESH_TOKEN: &str = "refresh_token";

#[async_trait]
impl RefreshTokenRepository for RefreshTokenRepositoryImpl {
    async fn insert(&self, new_token: CreateRefreshToken) -> RepositoryResult<RefreshToken> {
        let token: Option<SurrealRefreshToken> = self
            .db
            .create(REFRESH_TOKEN)
            .content(SurrealRefreshTokenCreate::from(new_token))
            .await?;

        token
            .map(Into::into)
            .ok_or(RepositoryError::MissingRecord(REFRESH_TOKEN))
    }

    async fn find(&self, token: &str) -> RepositoryResult<Option<RefreshToken>> {
        let token: Option<SurrealRefreshToken> = self
            .db
            .query("SELECT * FROM type::table($table) WHERE token = type::string($token) LIMIT 1")
            .bind(("table", REFRESH_TOKEN))
            .bind(("token", token.to_owned()))
            .await?
            .take(0)?;

        Ok(token.map(Into::into))
    }

    async fn delete(&self, id: &str) -> RepositoryResult<bool> {
        let deleted: Option<SurrealRefreshToken> =
            self.db.delete((REFRESH_TOKEN, id.to_owned())).await?;

        Ok(deleted.is_some())
    }
}
