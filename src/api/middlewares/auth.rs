use crate::domain::error::AppError;
use crate::domain::models::jsonwebtoken::AccessClaims;
use crate::domain::models::role::{AnyRole, RolePolicy};
use crate::domain::services::jsonwebtoken::JsonWebTokenService;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, http::header, web};
use futures::future::{Ready, err, ok, ready};
use std::marker::PhantomData;
use std::sync::Arc;

/// Access token claims of a caller whose role is allowed by `P`.
#[derive(Debug)]
pub struct Authorized<P: RolePolicy = AnyRole> {
    pub claims: AccessClaims,
    policy: PhantomData<fn() -> P>,
}

/// Raw credential of an `Authorization: Bearer` header, verified later by whoever consumes it.
#[derive(Debug)]
pub struct BearerToken(pub String);

/// Credential from an `Authorization: Bearer` header. The scheme is case-insensitive.
fn bearer_header(req: &HttpRequest) -> Option<Result<String, AppError>> {
    let value = req.headers().get(header::AUTHORIZATION)?;

    let credential = value
        .to_str()
        .map_err(|_| AppError::Unauthorized().trace("authorization header is not ascii"))
        .and_then(|value| {
            value
                .trim()
                .split_once(char::is_whitespace)
                .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
                .map(|(_, token)| token.trim().to_string())
                .filter(|token| !token.is_empty())
                .ok_or_else(|| AppError::Unauthorized().trace("expected a bearer credential"))
        });

    Some(credential)
}

/// Header first, then the `Authorization` cookie.
fn get_token(req: &HttpRequest) -> Result<String, AppError> {
    if let Some(credential) = bearer_header(req) {
        return credential;
    }

    req.cookie("Authorization")
        .map(|cookie| cookie.value().trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(AppError::Unauthorized)
}

fn authorize<P: RolePolicy>(req: &HttpRequest) -> Result<Authorized<P>, AppError> {
    let Some(jsonwebtoken_service) = req.app_data::<web::Data<Arc<dyn JsonWebTokenService>>>()
    else {
        return Err(AppError::InternalError().trace("JsonWebTokenService is not defined"));
    };

    let claims = jsonwebtoken_service.verify_access_token(&get_token(req)?)?;

    if !P::permits(claims.role) {
        return Err(AppError::Forbidden().trace(&format!("role {} is not allowed", claims.role)));
    }

    Ok(Authorized {
        claims,
        policy: PhantomData,
    })
}

impl<P: RolePolicy> FromRequest for Authorized<P> {
    type Error = AppError;
    type Future = Ready<Result<Authorized<P>, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authorize(req))
    }
}

impl FromRequest for BearerToken {
    type Error = AppError;
    type Future = Ready<Result<BearerToken, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match bearer_header(req).unwrap_or_else(|| Err(AppError::Unauthorized())) {
            Ok(token) => ok(BearerToken(token)),
            Err(error) => err(error),
        }
    }
}
