use std::sync::Arc;

use crate::api::dto::auth::{AccessTokenDTO, CodeDTO, ContactDTO, TelegramAuthDTO, TokenPairDTO};
use crate::api::error::ApiResult;
use crate::api::middlewares::auth::BearerToken;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::models::user::Contact;
use crate::domain::services::auth::AuthService;
use crate::domain::services::session::SessionService;
use crate::domain::services::telegram::TelegramAuthService;

use actix_web::{HttpResponse, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(get_code)
        .service(authenticate)
        .service(registration_with_telegram)
        .service(refresh);
}

/// Sends a sign-in code to a confirmed email or phone.
#[utoipa::path(
    responses(
        (status = 204, description = "Code Sent"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = ContactDTO,
    tag = "Auth",
)]
#[post("/auth/get_code")]
pub async fn get_code(
    payload: Json<ContactDTO>,
    auth_service: State<Arc<dyn AuthService>>,
) -> ApiResult {
    let contact = Contact::try_from(payload.into_inner())?;

    auth_service.request_code(contact).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    responses(
        (status = 200, body = TokenPairDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 403, body = AppError, example = json!(AppError::example_403())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = CodeDTO,
    tag = "Auth",
)]
#[post("/auth/authenticate")]
pub async fn authenticate(
    payload: Json<CodeDTO>,
    auth_service: State<Arc<dyn AuthService>>,
) -> ApiResult {
    let (contact, code) = payload.into_inner().into_parts()?;

    let pair = auth_service.authenticate(contact, code).await?;

    Ok(HttpResponse::Ok().json(TokenPairDTO::from(pair)))
}

/// Signs in a Telegram account, registering a user on its first visit.
#[utoipa::path(
    responses(
        (status = 200, body = TokenPairDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = TelegramAuthDTO,
    tag = "Auth",
)]
#[post("/auth/registration_with_telegram")]
pub async fn registration_with_telegram(
    payload: Json<TelegramAuthDTO>,
    telegram_service: State<Arc<dyn TelegramAuthService>>,
) -> ApiResult {
    let TelegramAuthDTO {
        telegram_id,
        secret_service_key,
    } = payload.into_inner();

    let pair = telegram_service
        .authorize(telegram_id, &secret_service_key)
        .await?;

    Ok(HttpResponse::Ok().json(TokenPairDTO::from(pair)))
}

/// Exchanges a refresh token for a new access token. The refresh token is consumed.
#[utoipa::path(
    responses(
        (status = 200, body = AccessTokenDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Auth",
)]
#[post("/auth/refresh")]
pub async fn refresh(
    token: BearerToken,
    session_service: State<Arc<dyn SessionService>>,
) -> ApiResult {
    let access_token = session_service.refresh(&token.0).await?;

    Ok(HttpResponse::Ok().json(AccessTokenDTO::from(access_token)))
}
