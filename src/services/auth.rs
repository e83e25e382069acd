use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use tracing::info;

use crate::domain::{
    error::{AppError, AppResult},
    models::jsonwebtoken::TokenPair,
    models::user::{Contact, CreateUser, Registration, User},
    repositories::repository::RepositoryError,
    repositories::user::UserRepository,
    services::auth::AuthService,
    services::notification::CodeSender,
    services::session::SessionService,
};

pub struct AuthServiceImpl {
    users: Arc<dyn UserRepository>,
    sessions: Arc<dyn SessionService>,
    sender: Arc<dyn CodeSender>,
}

impl AuthServiceImpl {
    pub fn new(
        users: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionService>,
        sender: Arc<dyn CodeSender>,
    ) -> Self {
        Self {
            users,
            sessions,
            sender,
        }
    }

    async fn find(&self, contact: &Contact, missing: &str) -> AppResult<User> {
        self.users
            .find_one(contact)
            .await?
            .ok_or_else(|| AppError::NotFound(missing))
    }

    /// Consumes the pending code of `contact` and opens a session for `user`.
    async fn redeem(&self, user: &User, contact: &Contact, code: u32) -> AppResult<TokenPair> {
        if user.verification_code(contact) != Some(code) {
            return Err(AppError::Unauthorized().trace("verification code mismatch"));
        }

        if !self.users.consume_code(contact, code).await? {
            return Err(AppError::Unauthorized().trace("verification code already used"));
        }

        self.sessions.open(user).await
    }
}

const ALREADY_REGISTERED: &str = "User is already registered, confirm the code or sign in";

pub fn generate_code() -> u32 {
    rand::thread_rng().gen_range(100_001..=999_997)
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn register(&self, registration: Registration) -> AppResult<User> {
        let contact = registration
            .confirmation_contact()
            .ok_or_else(|| AppError::UnprocessableEntity("Email or phone is required"))?;

        for known in registration.contacts() {
            if self.users.is_registered(&known).await? {
                return Err(AppError::Conflict(ALREADY_REGISTERED));
            }
        }

        let code = generate_code();

        let user = match self
            .users
            .create(CreateUser::new(registration, &contact, code))
            .await
        {
            Err(RepositoryError::Conflict(index)) => {
                return Err(AppError::Conflict(ALREADY_REGISTERED).trace(&index));
            }
            result => result?,
        };

        self.sender.send(&contact, code).await?;

        info!(user_id = user.id, channel = %contact, "user registered");

        Ok(user)
    }

    async fn confirm(&self, contact: Contact, code: u32) -> AppResult<TokenPair> {
        let user = self.find(&contact, "User is not registered").await?;

        if user.is_verified(&contact) {
            return Err(AppError::Conflict(format!(
                "The {contact} is already confirmed, sign in instead"
            )));
        }

        self.redeem(&user, &contact, code).await
    }

    async fn request_code(&self, contact: Contact) -> AppResult<()> {
        let user = self.find(&contact, "User not found").await?;

        if !user.is_verified(&contact) {
            return Err(AppError::Forbidden().trace(&format!("{contact} is not confirmed")));
        }

        if user.verification_code(&contact).is_some() {
            return Err(AppError::Conflict("Code has already been sent"));
        }

        let code = generate_code();

        if !self.users.store_code(&contact, code).await? {
            return Err(AppError::InternalError().trace("user vanished while storing code"));
        }

        self.sender.send(&contact, code).await
    }

    async fn authenticate(&self, contact: Contact, code: u32) -> AppResult<TokenPair> {
        let user = self.find(&contact, "User not found").await?;

        if !user.is_verified(&contact) {
            return Err(AppError::Forbidden().trace(&format!("{contact} is not confirmed")));
        }

        self.redeem(&user, &contact, code).await
    }

    async fn profile(&self, id: i64) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found"))
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::Mutex;

    use super::*;
    use crate::domain::models::role::Role;
    use crate::domain::repositories::repository::RepositoryResult;
    use crate::domain::services::jsonwebtoken::JsonWebTokenService;
    use crate::infrastructure::repositories::refresh_token::mock::RefreshTokenRepositoryImpl;
    use crate::infrastructure::repositories::user::mock::UserRepositoryImpl;
    use crate::services::notification::mock::CodeSenderImpl;
    use crate::services::session::SessionServiceImpl;
    use crate::tests::utils::keys::jsonwebtoken_service;
    use crate::tests::utils::seed::user;
    use rstest::*;

    const EMAIL: &str = "ivan@mail.com";
    const PHONE: &str = "+79990001122";

    struct Context {
        service: AuthServiceImpl,
        users: Arc<UserRepositoryImpl>,
        sender: Arc<CodeSenderImpl>,
        tokens: Arc<dyn JsonWebTokenService>,
    }

    #[fixture]
    fn context() -> Context {
        let mut verified = user(1, Role::Recruiter);
        verified.email = Some(EMAIL.to_string());
        verified.is_verified_email = true;

        let users = Arc::new(UserRepositoryImpl {
            users: Mutex::new(vec![verified]),
        });
        let tokens: Arc<dyn JsonWebTokenService> = Arc::new(jsonwebtoken_service());
        let sessions = Arc::new(SessionServiceImpl::new(
            tokens.clone(),
            Arc::new(RefreshTokenRepositoryImpl::default()),
            users.clone(),
        ));
        let sender = Arc::new(CodeSenderImpl::default());

        Context {
            service: AuthServiceImpl::new(users.clone(), sessions, sender.clone()),
            users,
            sender,
            tokens,
        }
    }

    fn registration(email: Option<&str>, phone: Option<&str>) -> Registration {
        Registration {
            name: "Petr".to_string(),
            surname: "Sidorov".to_string(),
            patronymic: Some("Ivanovich".to_string()),
            email: email.map(str::to_string),
            phone: phone.map(str::to_string),
        }
    }

    #[test]
    fn test_generate_code_range() {
        for _ in 0..1000 {
            assert!((100_001..=999_997).contains(&generate_code()));
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_register_sends_code_to_phone(context: Context) {
        let user = context
            .service
            .register(registration(Some("petr@mail.com"), Some(PHONE)))
            .await
            .unwrap();

        let phone = Contact::Phone(PHONE.to_string());
        assert_eq!(user.id, 2);
        assert_eq!(user.role, Role::User);
        assert_eq!(
            context.sender.last_code(&phone).await,
            user.verification_code_phone
        );
        assert_eq!(user.verification_code_email, None);
    }

    #[rstest]
    #[tokio::test]
    async fn test_register_conflict(context: Context) {
        let result = context
            .service
            .register(registration(Some(EMAIL), None))
            .await;

        assert_eq!(
            result.unwrap_err(),
            AppError::Conflict("User is already registered, confirm the code or sign in")
        );
    }

    /// Reports every contact as free, as a concurrent registration would observe it.
    struct StaleLookup(Arc<UserRepositoryImpl>);

    #[async_trait]
    impl UserRepository for StaleLookup {
        async fn is_registered(&self, _: &Contact) -> RepositoryResult<bool> {
            Ok(false)
        }
        async fn create(&self, new_user: CreateUser) -> RepositoryResult<User> {
            self.0.create(new_user).await
        }
        async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
            self.0.find_by_id(id).await
        }
        async fn find_one(&self, contact: &Contact) -> RepositoryResult<Option<User>> {
            self.0.find_one(contact).await
        }
        async fn delete(&self, id: i64) -> RepositoryResult<bool> {
            self.0.delete(id).await
        }
        async fn store_code(&self, contact: &Contact, code: u32) -> RepositoryResult<bool> {
            self.0.store_code(contact, code).await
        }
        async fn consume_code(&self, contact: &Contact, code: u32) -> RepositoryResult<bool> {
            self.0.consume_code(contact, code).await
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_register_conflict_on_insert(context: Context) {
        let users = Arc::new(StaleLookup(context.users.clone()));
        let sessions = Arc::new(SessionServiceImpl::new(
            context.tokens.clone(),
            Arc::new(RefreshTokenRepositoryImpl::default()),
            users.clone(),
        ));
        let service = AuthServiceImpl::new(users, sessions, context.sender.clone());

        let result = service.register(registration(Some(EMAIL), None)).await;

        let error = result.unwrap_err();
        assert_eq!(error.code, 409);
        assert_eq!(error.message, ALREADY_REGISTERED);
        assert_eq!(context.users.users.lock().await.len(), 1);
        assert!(context.sender.sent.lock().await.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn test_register_without_contact(context: Context) {
        let result = context.service.register(registration(None, None)).await;

        assert_eq!(result.unwrap_err().code, 422);
    }

    #[rstest]
    #[tokio::test]
    async fn test_confirm_opens_session(context: Context) {
        context
            .service
            .register(registration(None, Some(PHONE)))
            .await
            .unwrap();

        let phone = Contact::Phone(PHONE.to_string());
        let code = context.sender.last_code(&phone).await.unwrap();

        let pair = context.service.confirm(phone.clone(), code).await.unwrap();

        let claims = context
            .tokens
            .verify_access_token(&pair.access_token.token)
            .unwrap();
        assert_eq!(claims.id, 2);
        assert_eq!(pair.role, Role::User);

        let user = context.users.find_one(&phone).await.unwrap().unwrap();
        assert!(user.is_verified_phone);
        assert_eq!(user.verification_code_phone, None);
    }

    #[rstest]
    #[tokio::test]
    async fn test_confirm_wrong_code(context: Context) {
        context
            .service
            .register(registration(None, Some(PHONE)))
            .await
            .unwrap();

        let phone = Contact::Phone(PHONE.to_string());
        let code = context.sender.last_code(&phone).await.unwrap();
        let wrong = if code == 100_001 { 100_002 } else { code - 1 };

        let result = context.service.confirm(phone, wrong).await;

        assert_eq!(result.unwrap_err().code, 401);
    }

    #[rstest]
    #[tokio::test]
    async fn test_confirm_twice(context: Context) {
        let result = context
            .service
            .confirm(Contact::Email(EMAIL.to_string()), 123456)
            .await;

        assert_eq!(result.unwrap_err().code, 409);
    }

    #[rstest]
    #[tokio::test]
    async fn test_confirm_unknown_user(context: Context) {
        let result = context
            .service
            .confirm(Contact::Phone("+70000000000".to_string()), 123456)
            .await;

        assert_eq!(
            result.unwrap_err(),
            AppError::NotFound("User is not registered")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_login_with_code(context: Context) {
        let email = Contact::Email(EMAIL.to_string());

        context.service.request_code(email.clone()).await.unwrap();
        let code = context.sender.last_code(&email).await.unwrap();

        let pair = context
            .service
            .authenticate(email.clone(), code)
            .await
            .unwrap();
        assert_eq!(pair.role, Role::Recruiter);

        let again = context.service.authenticate(email, code).await;
        assert_eq!(again.unwrap_err().code, 401);
    }

    #[rstest]
    #[tokio::test]
    async fn test_request_code_twice(context: Context) {
        let email = Contact::Email(EMAIL.to_string());

        context.service.request_code(email.clone()).await.unwrap();

        assert_eq!(
            context.service.request_code(email).await.unwrap_err(),
            AppError::Conflict("Code has already been sent")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_request_code_unverified(context: Context) {
        context
            .service
            .register(registration(None, Some(PHONE)))
            .await
            .unwrap();

        let result = context
            .service
            .request_code(Contact::Phone(PHONE.to_string()))
            .await;

        assert_eq!(result.unwrap_err().code, 403);
    }

    #[rstest]
    #[tokio::test]
    async fn test_authenticate_unknown_user(context: Context) {
        let result = context
            .service
            .authenticate(Contact::Email("nobody@mail.com".to_string()), 123456)
            .await;

        assert_eq!(result.unwrap_err(), AppError::NotFound("User not found"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_profile(context: Context) {
        assert_eq!(context.service.profile(1).await.unwrap().role, Role::Recruiter);
        assert_eq!(context.service.profile(42).await.unwrap_err().code, 404);
    }
}
