use chrono::NaiveDateTime;
use rocket::serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: NaiveDateTime,
}

/// What the admin listing exposes per account. The password hash never
/// leaves the store layer.
#[derive(Serialize, Debug)]
pub struct UserResponse {
    pub username: String,
    pub is_admin: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            is_admin: user.is_admin,
        }
    }
}
