use std::sync::Arc;

use crate::api::dto::auth::{RegistrationDTO, TokenPairDTO, VerifyEmailDTO, VerifyPhoneDTO};
use crate::api::dto::user::UserDTO;
use crate::api::error::ApiResult;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::models::user::Contact;
use crate::domain::services::auth::AuthService;

use actix_web::{HttpResponse, post, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(create)
        .service(verify_by_phone)
        .service(verify_by_email);
}

/// Registers a user and sends a confirmation code to the phone, or to the email without one.
#[utoipa::path(
    responses(
        (status = 200, body = UserDTO, description = "User Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = RegistrationDTO,
    tag = "Registration",
)]
#[post("/create")]
pub async fn create(
    payload: Json<RegistrationDTO>,
    auth_service: State<Arc<dyn AuthService>>,
) -> ApiResult {
    let user = auth_service.register(payload.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(UserDTO::from(user)))
}

#[utoipa::path(
    responses(
        (status = 200, body = TokenPairDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = VerifyPhoneDTO,
    tag = "Registration",
)]
#[post("/create/verify_by_phone")]
pub async fn verify_by_phone(
    payload: Json<VerifyPhoneDTO>,
    auth_service: State<Arc<dyn AuthService>>,
) -> ApiResult {
    let VerifyPhoneDTO { phone, code } = payload.into_inner();

    let pair = auth_service.confirm(Contact::Phone(phone), code).await?;

    Ok(HttpResponse::Ok().json(TokenPairDTO::from(pair)))
}

#[utoipa::path(
    responses(
        (status = 200, body = TokenPairDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = VerifyEmailDTO,
    tag = "Registration",
)]
#[post("/create/verify_by_email")]
pub async fn verify_by_email(
    payload: Json<VerifyEmailDTO>,
    auth_service: State<Arc<dyn AuthService>>,
) -> ApiResult {
    let VerifyEmailDTO { email, code } = payload.into_inner();

    let pair = auth_service.confirm(Contact::Email(email), code).await?;

    Ok(HttpResponse::Ok().json(TokenPairDTO::from(pair)))
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App,
        dev::ServiceResponse,
        http::StatusCode,
        test::{self, TestRequest},
    };
    use serde::{Deserialize, Serialize};
    use serde_json::{Value, json};
    use utoipa_actix_web::AppExt;

    use super::*;

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    struct Error {
        code: u16,
        message: String,
    }

    async fn post(uri: &str, data: Value) -> ServiceResponse {
        let app =
            test::init_service(App::new().into_utoipa_app().configure(routes).into_app()).await;

        TestRequest::post()
            .uri(uri)
            .set_json(data)
            .send_request(&app)
            .await
    }

    #[actix_web::test]
    async fn test_create_without_contact() {
        let res = post(
            "/create",
            json!({
                "name": "Ivan",
                "surname": "Petrov"
            }),
        )
        .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: Error = test::read_body_json(res).await;
        assert_eq!(err.code, 422);
        assert!(err.message.contains("Email or phone is required"));
    }

    #[actix_web::test]
    async fn test_create_invalid_phone() {
        let res = post(
            "/create",
            json!({
                "name": "Ivan",
                "surname": "Petrov",
                "phone": "call me"
            }),
        )
        .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: Error = test::read_body_json(res).await;
        assert!(
            err.message
                .contains("Phone must contain 10 to 15 digits with an optional leading +")
        );
    }

    #[actix_web::test]
    async fn test_create_missing_surname() {
        let res = post(
            "/create",
            json!({
                "name": "Ivan",
                "email": "ivan@mail.com"
            }),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let err: Error = test::read_body_json(res).await;
        assert_eq!(err.code, 400);
    }

    #[actix_web::test]
    async fn test_create_blank_name() {
        let res = post(
            "/create",
            json!({
                "name": "  ",
                "surname": "Petrov",
                "email": "ivan@mail.com"
            }),
        )
        .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let err: Error = test::read_body_json(res).await;
        assert!(
            err.message
                .contains("Name must contain between 1 and 100 characters")
        );
    }

    #[actix_web::test]
    async fn test_verify_by_email_short_code() {
        let res = post(
            "/create/verify_by_email",
            json!({
                "email": "ivan@mail.com",
                "code": 42
            }),
        )
        .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let err: Error = test::read_body_json(res).await;
        assert!(err.message.contains("Code must contain 6 digits"));
    }

    #[actix_web::test]
    async fn test_verify_by_phone_missing_code() {
        let res = post(
            "/create/verify_by_phone",
            json!({
                "phone": "+79990001122"
            }),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
