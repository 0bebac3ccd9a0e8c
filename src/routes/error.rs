use crate::render::Page;
use rocket::catch;
use rocket::response::Redirect;
use rocket::serde::json::json;

/// An anonymous caller never sees protected content; they are sent to the
/// login form instead.
#[catch(401)]
pub fn unauthorized() -> Redirect {
    Redirect::to(rocket::uri!(super::user::login_page))
}

#[catch(404)]
pub fn not_found() -> Page {
    Page::render("not_found", json!({}))
}
