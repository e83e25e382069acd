use crate::services::jsonwebtoken::{JsonWebTokenServiceImpl, KeyPair, TokenLifetimes};

pub const TEST_SECRET: &[u8] = b"test-secret-for-signing-tokens";

pub const TELEGRAM_SERVICE_KEY: &str = "test-telegram-service-key";

pub fn jsonwebtoken_service() -> JsonWebTokenServiceImpl {
    JsonWebTokenServiceImpl::new(KeyPair::from_secret(TEST_SECRET), TokenLifetimes::default())
}
