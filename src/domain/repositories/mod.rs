pub mod refresh_token;
pub mod repository;
pub mod telegram;
pub mod user;
