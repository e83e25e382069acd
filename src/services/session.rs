use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::{info, warn};

use crate::domain::{
    error::{AppResult, TokenError},
    models::jsonwebtoken::{SignedToken, TokenPair},
    models::refresh_token::{CreateRefreshToken, RefreshToken},
    models::user::User,
    repositories::refresh_token::RefreshTokenRepository,
    repositories::user::UserRepository,
    services::jsonwebtoken::JsonWebTokenService,
    services::session::{RefreshError, SessionService},
};

pub struct SessionServiceImpl {
    tokens: Arc<dyn JsonWebTokenService>,
    refresh_tokens: Arc<dyn RefreshTokenRepository>,
    users: Arc<dyn UserRepository>,
}

impl SessionServiceImpl {
    pub fn new(
        tokens: Arc<dyn JsonWebTokenService>,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            tokens,
            refresh_tokens,
            users,
        }
    }

    /// Removes the stored row of a token that is no longer redeemable.
    async fn discard(&self, token: &str) -> Result<(), RefreshError> {
        if let Some(record) = self.refresh_tokens.find(token).await? {
            self.refresh_tokens.delete(&record.id).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SessionService for SessionServiceImpl {
    async fn open(&self, user: &User) -> AppResult<TokenPair> {
        let access_token = self.tokens.issue_access_token(user.id, user.role, None)?;
        let refresh_token = self.issue_refresh_token(user.id, None).await?;

        info!(user_id = user.id, role = %user.role, "session opened");

        Ok(TokenPair {
            access_token,
            refresh_token: SignedToken {
                token: refresh_token.token,
                expiration: refresh_token.expires_at,
            },
            role: user.role,
        })
    }

    async fn issue_refresh_token(
        &self,
        user_id: i64,
        validity: Option<Duration>,
    ) -> AppResult<RefreshToken> {
        let signed = self.tokens.issue_refresh_token(user_id, validity)?;

        Ok(self
            .refresh_tokens
            .insert(CreateRefreshToken {
                user_id,
                token: signed.token,
                expires_at: signed.expiration,
            })
            .await?)
    }

    async fn refresh(&self, token: &str) -> Result<SignedToken, RefreshError> {
        match self.tokens.verify_refresh_token(token) {
            Ok(_) => {}
            Err(TokenError::Expired) => {
                self.discard(token).await?;
                return Err(TokenError::Expired.into());
            }
            Err(error) => return Err(error.into()),
        }

        let record = self
            .refresh_tokens
            .find(token)
            .await?
            .ok_or(TokenError::NotFound)?;

        if record.expires_at < Utc::now().timestamp() {
            self.refresh_tokens.delete(&record.id).await?;
            return Err(TokenError::Expired.into());
        }

        // Only the caller whose delete removed the row may continue.
        if !self.refresh_tokens.delete(&record.id).await? {
            warn!(user_id = record.user_id, "refresh token redeemed concurrently");
            return Err(TokenError::NotFound.into());
        }

        let user = self
            .users
            .find_by_id(record.user_id)
            .await?
            .ok_or(TokenError::NotFound)?;

        let access_token = self.tokens.issue_access_token(user.id, user.role, None)?;

        info!(user_id = user.id, role = %user.role, "refresh token redeemed");

        Ok(access_token)
    }
}
