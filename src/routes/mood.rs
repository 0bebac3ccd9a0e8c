use crate::auth::CurrentUser;
use crate::database::sqlite_repository::SqliteRepository;
use crate::error::app_error::AppError;
use crate::forms::{MoodForm, field_errors};
use crate::render::{FormResponse, Page, notice};
use rocket::State;
use rocket::form::Form;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::serde::json::json;
use rocket::uri;
use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

#[rocket::get("/mood_tracker")]
pub async fn mood_tracker_page(
    pool: &State<SqlitePool>,
    current_user: CurrentUser,
    flash: Option<FlashMessage<'_>>,
) -> Result<Page, AppError> {
    let repo = SqliteRepository { pool: pool.inner().clone() };
    let entries = repo.list_mood_entries(current_user.0.id).await?;

    Ok(Page::render(
        "mood_tracker",
        json!({
            "entries": entries,
            "errors": {},
            "notice": notice(flash),
        }),
    ))
}

#[rocket::post("/mood_tracker", data = "<form>")]
pub async fn log_mood(
    pool: &State<SqlitePool>,
    current_user: CurrentUser,
    form: Form<MoodForm>,
) -> Result<FormResponse, AppError> {
    let repo = SqliteRepository { pool: pool.inner().clone() };

    if let Err(errors) = form.validate() {
        let entries = repo.list_mood_entries(current_user.0.id).await?;
        return Ok(FormResponse::Page(Page::render(
            "mood_tracker",
            json!({
                "entries": entries,
                "errors": field_errors(&errors),
                "notice": null,
            }),
        )));
    }

    // The date goes in exactly as submitted; see forms::MoodForm
    let entry = repo
        .add_mood_entry(current_user.0.id, &form.date, &form.mood, form.notes.as_deref())
        .await?;
    info!(user_id = current_user.0.id, entry_id = entry.id, "mood logged");

    // Redirect to self so a refresh does not resubmit the form
    Ok(FormResponse::Flash(Flash::success(
        Redirect::to(uri!(mood_tracker_page)),
        "Mood logged successfully!",
    )))
}
