#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    pub id: String,
    pub user_id: i64,
    pub token: String,
    pub expires_at: i64,
}

#[derive(Debug, Clone)]
pub struct CreateRefreshToken {
    pub user_id: i64,
    pub token: String,
    pub expires_at: i64,
}
