/// Binds a Telegram account to exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramLink {
    pub telegram_id: String,
    pub user_id: i64,
}
