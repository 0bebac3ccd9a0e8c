use crate::database::sqlite_repository::SqliteRepository;
use crate::db;
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use rocket::{Build, Rocket};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// In-memory database with the schema applied. A single connection, so every
/// handle sees the same data.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    db::init_schema(&pool).await.expect("schema init");
    pool
}

pub async fn test_repository() -> SqliteRepository {
    SqliteRepository { pool: test_pool().await }
}

pub fn test_rocket_with_pool(pool: SqlitePool) -> Rocket<Build> {
    crate::mount_routes(rocket::build().manage(pool))
}

pub async fn test_rocket() -> Rocket<Build> {
    test_rocket_with_pool(test_pool().await)
}

/// Registers an account and opens a session on the tracked client.
pub async fn register_and_login(client: &Client, username: &str, password: &str) {
    let body = format!("username={username}&password={password}");

    let response = client.post("/register").header(ContentType::Form).body(body.clone()).dispatch().await;
    assert_eq!(response.status(), Status::SeeOther, "register {username}");

    let response = client.post("/login").header(ContentType::Form).body(body).dispatch().await;
    assert_eq!(response.status(), Status::SeeOther, "login {username}");
}
