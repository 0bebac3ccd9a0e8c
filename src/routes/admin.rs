use crate::auth::CurrentUser;
use crate::database::sqlite_repository::SqliteRepository;
use crate::error::app_error::AppError;
use crate::models::user::UserResponse;
use crate::render::{FormResponse, Page};
use rocket::State;
use rocket::response::{Flash, Redirect};
use rocket::serde::json::json;
use rocket::uri;
use sqlx::SqlitePool;
use tracing::warn;

#[rocket::get("/admin")]
pub async fn admin_page(pool: &State<SqlitePool>, current_user: CurrentUser) -> Result<FormResponse, AppError> {
    if !current_user.0.is_admin {
        warn!(user_id = current_user.0.id, "non-admin denied access to user listing");
        return Ok(FormResponse::Flash(Flash::error(
            Redirect::to(uri!(super::pages::dashboard)),
            "Access denied.",
        )));
    }

    let repo = SqliteRepository { pool: pool.inner().clone() };
    let users: Vec<UserResponse> = repo.list_users().await?.iter().map(UserResponse::from).collect();

    Ok(FormResponse::Page(Page::render("admin", json!({ "users": users }))))
}
