//! The rendering collaborator. Handlers hand over a template name plus a
//! context mapping; what markup comes back is a presentation concern. The
//! stub here emits the context as JSON inside a bare HTML shell so the
//! contract stays testable without a template engine.

use rocket::http::ContentType;
use rocket::request::{FlashMessage, Request};
use rocket::response::{self, Flash, Redirect, Responder, Response};
use rocket::serde::json::{Value, json};
use std::io::Cursor;

#[derive(Debug)]
pub struct Page {
    template: &'static str,
    context: Value,
}

impl Page {
    pub fn render(template: &'static str, context: Value) -> Self {
        Self { template, context }
    }
}

impl<'r> Responder<'r, 'static> for Page {
    fn respond_to(self, _req: &Request<'_>) -> response::Result<'static> {
        let body = format!(
            "<!DOCTYPE html>\n<html>\n<body data-template=\"{}\">\n\
             <script id=\"context\" type=\"application/json\">{}</script>\n\
             </body>\n</html>\n",
            self.template, self.context
        );

        Response::build()
            .header(ContentType::HTML)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

/// What a form handler may answer with: a re-rendered page (validation
/// failures stay on the form) or a redirect, with or without a notice.
#[derive(rocket::Responder)]
pub enum FormResponse {
    Page(Page),
    Redirect(Redirect),
    Flash(Flash<Redirect>),
}

/// Folds a one-time flash message into a page context value.
pub fn notice(flash: Option<FlashMessage<'_>>) -> Value {
    match flash {
        Some(flash) => json!({ "kind": flash.kind(), "message": flash.message() }),
        None => Value::Null,
    }
}
