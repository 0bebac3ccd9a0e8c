use crate::database::sqlite_repository::SqliteRepository;
use crate::error::app_error::AppError;
use crate::models::mood::MoodEntry;

impl SqliteRepository {
    pub async fn add_mood_entry(
        &self,
        user_id: i64,
        date: &str,
        mood: &str,
        notes: Option<&str>,
    ) -> Result<MoodEntry, AppError> {
        let entry = sqlx::query_as::<_, MoodEntry>(
            r#"
            INSERT INTO mood_entries (user_id, date, mood, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, date, mood, notes, created_at
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(mood)
        .bind(notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(entry)
    }

    /// The owner's entries in insertion order. A fresh query each call.
    pub async fn list_mood_entries(&self, user_id: i64) -> Result<Vec<MoodEntry>, AppError> {
        let entries = sqlx::query_as::<_, MoodEntry>(
            r#"
            SELECT id, user_id, date, mood, notes, created_at
            FROM mood_entries
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
