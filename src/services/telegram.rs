use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::{
    error::{AppError, AppResult},
    models::jsonwebtoken::TokenPair,
    models::role::Role,
    models::telegram::TelegramLink,
    models::user::{CreateUser, User},
    repositories::repository::RepositoryError,
    repositories::telegram::TelegramLinkRepository,
    repositories::user::UserRepository,
    services::session::SessionService,
    services::telegram::TelegramAuthService,
};

pub struct TelegramAuthServiceImpl {
    users: Arc<dyn UserRepository>,
    links: Arc<dyn TelegramLinkRepository>,
    sessions: Arc<dyn SessionService>,
    service_key: String,
}

impl TelegramAuthServiceImpl {
    pub fn new(
        users: Arc<dyn UserRepository>,
        links: Arc<dyn TelegramLinkRepository>,
        sessions: Arc<dyn SessionService>,
        service_key: String,
    ) -> Self {
        Self {
            users,
            links,
            sessions,
            service_key,
        }
    }

    async fn linked_user(&self, telegram_id: &str) -> AppResult<Option<User>> {
        let Some(user_id) = self.links.find_user_id(telegram_id).await? else {
            return Ok(None);
        };

        self.users
            .find_by_id(user_id)
            .await?
            .map(Some)
            .ok_or_else(|| AppError::NotFound("User not found"))
    }

    /// Creates a user for `telegram_id`. Losing a concurrent race yields the winner's user.
    async fn create_linked_user(&self, telegram_id: String) -> AppResult<User> {
        let user = self
            .users
            .create(CreateUser {
                name: "Telegram".to_string(),
                surname: "User".to_string(),
                patronymic: None,
                email: None,
                phone: None,
                verification_code_email: None,
                verification_code_phone: None,
                role: Role::default(),
            })
            .await?;

        let link = TelegramLink {
            telegram_id: telegram_id.clone(),
            user_id: user.id,
        };

        match self.links.link(link).await {
            Ok(()) => {
                info!(user_id = user.id, "user registered with telegram");
                Ok(user)
            }
            Err(RepositoryError::Conflict(index)) => {
                warn!(user_id = user.id, index = %index, "telegram account linked concurrently");
                self.users.delete(user.id).await?;

                self.linked_user(&telegram_id)
                    .await?
                    .ok_or_else(|| AppError::Conflict("Telegram account is already linked"))
            }
            Err(error) => Err(error.into()),
        }
    }
}

#[async_trait]
impl TelegramAuthService for TelegramAuthServiceImpl {
    async fn authorize(&self, telegram_id: String, service_key: &str) -> AppResult<TokenPair> {
        if self.service_key.is_empty() || self.service_key != service_key {
            return Err(AppError::Unauthorized().trace("telegram service key mismatch"));
        }

        let user = match self.linked_user(&telegram_id).await? {
            Some(user) => user,
            None => self.create_linked_user(telegram_id).await?,
        };

        self.sessions.open(&user).await
    }
}
