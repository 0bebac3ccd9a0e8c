use chrono::NaiveDateTime;
use rocket::serde::Serialize;

/// One journal record: a self-reported mood with optional notes on a given
/// date. The date is kept as the string the user submitted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MoodEntry {
    pub id: i64,
    pub user_id: i64,
    pub date: String,
    pub mood: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}
