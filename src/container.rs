use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::repositories::refresh_token::RefreshTokenRepository;
use crate::domain::repositories::telegram::TelegramLinkRepository;
use crate::domain::repositories::user::UserRepository;
use crate::domain::services::auth::AuthService;
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use crate::domain::services::notification::CodeSender;
use crate::domain::services::session::SessionService;
use crate::domain::services::telegram::TelegramAuthService;

use crate::services::auth::AuthServiceImpl;
use crate::services::session::SessionServiceImpl;
use crate::services::telegram::TelegramAuthServiceImpl;

use crate::infrastructure::repositories::refresh_token::RefreshTokenRepositoryImpl;
use crate::infrastructure::repositories::telegram::TelegramLinkRepositoryImpl;
use crate::infrastructure::repositories::user::UserRepositoryImpl;

pub struct Container {
    pub auth_service: Arc<dyn AuthService>,
    pub session_service: Arc<dyn SessionService>,
    pub telegram_service: Arc<dyn TelegramAuthService>,
    pub jsonwebtoken_service: Arc<dyn JsonWebTokenService>,
}

impl Container {
    pub fn new(
        conn: Surreal<Client>,
        jsonwebtoken_service: Arc<dyn JsonWebTokenService>,
        code_sender: Arc<dyn CodeSender>,
        telegram_service_key: String,
    ) -> Self {
        let db = Arc::new(conn);

        let user_repository: Arc<dyn UserRepository> =
            Arc::new(UserRepositoryImpl::new(db.clone()));

        let session_service =
            session_service(db.clone(), jsonwebtoken_service.clone(), user_repository.clone());

        let telegram_link_repository: Arc<dyn TelegramLinkRepository> =
            Arc::new(TelegramLinkRepositoryImpl::new(db));

        Container {
            auth_service: Arc::new(AuthServiceImpl::new(
                user_repository.clone(),
                session_service.clone(),
                code_sender,
            )),
            telegram_service: Arc::new(TelegramAuthServiceImpl::new(
                user_repository,
                telegram_link_repository,
                session_service.clone(),
                telegram_service_key,
            )),
            session_service,
            jsonwebtoken_service,
        }
    }
}

fn session_service(
    db: Arc<Surreal<Client>>,
    jsonwebtoken_service: Arc<dyn JsonWebTokenService>,
    user_repository: Arc<dyn UserRepository>,
) -> Arc<dyn SessionService> {
    let refresh_token_repository: Arc<dyn RefreshTokenRepository> =
        Arc::new(RefreshTokenRepositoryImpl::new(db));

    Arc::new(SessionServiceImpl::new(
        jsonwebtoken_service,
        refresh_token_repository,
        user_repository,
    ))
}
