use std::sync::Arc;

use crate::api::dto::user::UserDTO;
use crate::api::error::ApiResult;
use crate::api::middlewares::auth::Authorized;
use crate::domain::error::AppError;
use crate::domain::services::auth::AuthService;

use actix_web::{HttpResponse, get, web::Data as State};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(me);
}

#[utoipa::path(
    responses(
        (status = 200, body = UserDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    security(("jsonwebtoken" = [])),
    tag = "Users",
)]
#[get("/users/me")]
pub async fn me(auth: Authorized, auth_service: State<Arc<dyn AuthService>>) -> ApiResult {
    let user = auth_service.profile(auth.claims.id).await?;

    Ok(HttpResponse::Ok().json(UserDTO::from(user)))
}
