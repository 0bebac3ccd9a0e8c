use crate::database::sqlite_repository::SqliteRepository;
use crate::error::app_error::AppError;
use crate::models::user::User;
use rocket::http::{Cookie, CookieJar, Status};
use rocket::outcome::Outcome;
use rocket::request::{FromRequest, Outcome as RequestOutcome, Request};
use sqlx::SqlitePool;

const SESSION_COOKIE: &str = "user";

/// The authenticated caller. Resolving this guard is the only way a handler
/// learns an identity: the session cookie is mapped back to a full `User`
/// row on every request, so account changes take effect immediately.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

pub(crate) fn parse_session_cookie_value(value: &str) -> Option<i64> {
    value.parse::<i64>().ok()
}

/// Binds the session to the user: Anonymous -> Authenticated(user_id).
pub fn login(cookies: &CookieJar<'_>, user: &User) {
    cookies.add_private(Cookie::build((SESSION_COOKIE, user.id.to_string())).path("/").build());
}

/// Tears the session down. A no-op when there is no session.
pub fn logout(cookies: &CookieJar<'_>) {
    cookies.remove_private(Cookie::build(SESSION_COOKIE).build());
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for CurrentUser {
    type Error = AppError;

    async fn from_request(req: &'r Request<'_>) -> RequestOutcome<Self, Self::Error> {
        let cookies = req.cookies();
        if let Some(cookie) = cookies.get_private(SESSION_COOKIE)
            && let Some(user_id) = parse_session_cookie_value(cookie.value())
        {
            let pool = match req.rocket().state::<SqlitePool>() {
                Some(pool) => pool,
                None => return Outcome::Error((Status::InternalServerError, AppError::Unauthorized)),
            };

            let repo = SqliteRepository { pool: pool.clone() };

            match repo.get_user_by_id(user_id).await {
                Ok(Some(user)) => return Outcome::Success(CurrentUser(user)),
                Ok(None) => {
                    // The account is gone; drop the stale cookie
                    logout(cookies);
                    return Outcome::Error((Status::Unauthorized, AppError::Unauthorized));
                }
                Err(err) => return Outcome::Error((Status::InternalServerError, err)),
            }
        }

        Outcome::Error((Status::Unauthorized, AppError::Unauthorized))
    }
}
