use rocket::serde::Serialize;

/// JSON body returned by the chat endpoint.
#[derive(Serialize, Debug)]
pub struct ChatReply {
    pub response: String,
}
