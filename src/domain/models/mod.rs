pub mod jsonwebtoken;
pub mod refresh_token;
pub mod role;
pub mod user;
pub mod telegram;
