use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").unwrap());

pub fn is_email(email: &str) -> Result<(), ValidationError> {
    if email.len() < 3 || email.len() > 255 {
        return Err(ValidationError::new("0")
            .with_message(Cow::from("Email must contain between 3 and 255 characters")));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(ValidationError::new("0").with_message(Cow::from("Invalid email format")));
    }

    Ok(())
}

pub fn is_phone(phone: &str) -> Result<(), ValidationError> {
    if !PHONE_REGEX.is_match(phone) {
        return Err(ValidationError::new("0").with_message(Cow::from(
            "Phone must contain 10 to 15 digits with an optional leading +",
        )));
    }

    Ok(())
}

pub fn is_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() || name.chars().count() > 100 {
        return Err(ValidationError::new("0")
            .with_message(Cow::from("Name must contain between 1 and 100 characters")));
    }

    Ok(())
}

pub fn has_contact(email: &Option<String>, phone: &Option<String>) -> Result<(), ValidationError> {
    if email.is_none() && phone.is_none() {
        return Err(ValidationError::new("contact")
            .with_message(Cow::from("Email or phone is required")));
    }

    Ok(())
}
