pub mod refresh_token;
pub mod telegram;
pub mod user;
