pub mod auth;
pub mod jsonwebtoken;
pub mod notification;
pub mod session;
pub mod telegram;
