use sqlx::SqlitePool;

/// Handle for all store operations. Constructed per request from the managed
/// pool rather than reached for as ambient global state.
pub struct SqliteRepository {
    pub pool: SqlitePool,
}
