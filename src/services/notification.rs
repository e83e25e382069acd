use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::error::AppResult;
use crate::domain::models::user::Contact;
use crate::domain::services::notification::CodeSender;

/// Writes codes to the log instead of handing them to a mail or SMS gateway.
#[derive(Debug, Default)]
pub struct LogCodeSender;

#[async_trait]
impl CodeSender for LogCodeSender {
    async fn send(&self, contact: &Contact, code: u32) -> AppResult<()> {
        info!(channel = %contact, recipient = %mask(contact.value()), "verification code issued");
        debug!(channel = %contact, code, "verification code");
        Ok(())
    }
}

/// Keeps the last four characters of a recipient address.
fn mask(value: &str) -> String {
    let visible = value.chars().count().saturating_sub(4);

    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible { '*' } else { c })
        .collect()
}
