use crate::api::dto::validation::{has_contact, is_email, is_name, is_phone};
use crate::domain::error::AppError;
use crate::domain::models::jsonwebtoken::{SignedToken, TokenPair};
use crate::domain::models::role::Role;
use crate::domain::models::user::{Contact, Registration};
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Validate, Deserialize, ToSchema)]
#[validate(schema(function = "registration_contact"))]
pub struct RegistrationDTO {
    #[validate(custom(function = "is_name"))]
    #[schema(examples("Ivan"))]
    pub name: String,

    #[validate(custom(function = "is_name"))]
    #[schema(examples("Petrov"))]
    pub surname: String,

    #[validate(custom(function = "is_name"))]
    #[schema(examples("Sergeevich"))]
    pub patronymic: Option<String>,

    #[validate(custom(function = "is_email"))]
    #[schema(examples("your@email.com"))]
    pub email: Option<String>,

    #[validate(custom(function = "is_phone"))]
    #[schema(examples("+79990001122"))]
    pub phone: Option<String>,
}

/// Login contact; email wins when both are present.
#[derive(Debug, Validate, Deserialize, ToSchema)]
#[validate(schema(function = "contact_present"))]
pub struct ContactDTO {
    #[validate(custom(function = "is_email"))]
    #[schema(examples("your@email.com"))]
    pub email: Option<String>,

    #[validate(custom(function = "is_phone"))]
    #[schema(examples("+79990001122"))]
    pub phone: Option<String>,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
#[validate(schema(function = "code_contact_present"))]
pub struct CodeDTO {
    #[validate(custom(function = "is_email"))]
    #[schema(examples("your@email.com"))]
    pub email: Option<String>,

    #[validate(custom(function = "is_phone"))]
    #[schema(examples("+79990001122"))]
    pub phone: Option<String>,

    #[validate(range(min = 100000, max = 999999, message = "Code must contain 6 digits"))]
    #[schema(examples(482913))]
    pub code: u32,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct VerifyEmailDTO {
    #[validate(custom(function = "is_email"))]
    #[schema(examples("your@email.com"))]
    pub email: String,

    #[validate(range(min = 100000, max = 999999, message = "Code must contain 6 digits"))]
    #[schema(examples(482913))]
    pub code: u32,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct VerifyPhoneDTO {
    #[validate(custom(function = "is_phone"))]
    #[schema(examples("+79990001122"))]
    pub phone: String,

    #[validate(range(min = 100000, max = 999999, message = "Code must contain 6 digits"))]
    #[schema(examples(482913))]
    pub code: u32,
}

/// Sent by the Telegram bot on behalf of a Telegram account.
#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct TelegramAuthDTO {
    #[validate(length(min = 1, max = 64, message = "Telegram id must contain 1 to 64 characters"))]
    #[schema(examples("123456789"))]
    pub telegram_id: String,

    #[validate(length(min = 1, message = "Service key is required"))]
    pub secret_service_key: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenPairDTO {
    #[schema(examples("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"))]
    pub access_token: String,
    #[schema(examples("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"))]
    pub refresh_token: String,
    pub role: Role,
    #[schema(examples(1760000000))]
    pub expires_at: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccessTokenDTO {
    #[schema(examples("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"))]
    pub access_token: String,
}

fn registration_contact(dto: &RegistrationDTO) -> Result<(), ValidationError> {
    has_contact(&dto.email, &dto.phone)
}

fn contact_present(dto: &ContactDTO) -> Result<(), ValidationError> {
    has_contact(&dto.email, &dto.phone)
}

fn code_contact_present(dto: &CodeDTO) -> Result<(), ValidationError> {
    has_contact(&dto.email, &dto.phone)
}

fn contact(email: Option<String>, phone: Option<String>) -> Result<Contact, AppError> {
    email
        .map(Contact::Email)
        .or(phone.map(Contact::Phone))
        .ok_or_else(|| AppError::UnprocessableEntity("Email or phone is required"))
}

impl From<RegistrationDTO> for Registration {
    fn from(registration: RegistrationDTO) -> Self {
        Registration {
            name: registration.name,
            surname: registration.surname,
            patronymic: registration.patronymic,
            email: registration.email,
            phone: registration.phone,
        }
    }
}

impl TryFrom<ContactDTO> for Contact {
    type Error = AppError;

    fn try_from(dto: ContactDTO) -> Result<Self, Self::Error> {
        contact(dto.email, dto.phone)
    }
}

impl CodeDTO {
    pub fn into_parts(self) -> Result<(Contact, u32), AppError> {
        Ok((contact(self.email, self.phone)?, self.code))
    }
}

impl From<TokenPair> for TokenPairDTO {
    fn from(pair: TokenPair) -> Self {
        TokenPairDTO {
            access_token: pair.access_token.token,
            refresh_token: pair.refresh_token.token,
            role: pair.role,
            expires_at: pair.access_token.expiration,
        }
    }
}

impl From<SignedToken> for AccessTokenDTO {
    fn from(token: SignedToken) -> Self {
        AccessTokenDTO {
            access_token: token.token,
        }
    }
}
