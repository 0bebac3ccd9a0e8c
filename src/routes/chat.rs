use crate::auth::CurrentUser;
use crate::forms::ChatForm;
use crate::models::chat::ChatReply;
use crate::render::Page;
use rocket::form::Form;
use rocket::serde::json::{Json, json};
use tracing::debug;

/// Placeholder until a real counsellor integration exists; the reply never
/// depends on the message and nothing is retained across calls.
const COUNSELLOR_REPLY: &str = "I'm here to listen. How are you feeling today?";

#[rocket::get("/chat")]
pub fn chat_page(_current_user: CurrentUser) -> Page {
    Page::render("chat", json!({}))
}

#[rocket::post("/chat", data = "<form>")]
pub fn chat_message(current_user: CurrentUser, form: Form<ChatForm>) -> Json<ChatReply> {
    debug!(user_id = current_user.0.id, message_len = form.message.len(), "chat message received");

    Json(ChatReply {
        response: COUNSELLOR_REPLY.to_string(),
    })
}
