use crate::auth::{self, CurrentUser};
use crate::database::sqlite_repository::SqliteRepository;
use crate::error::app_error::AppError;
use crate::forms::{LoginForm, RegisterForm, field_errors};
use crate::render::{FormResponse, Page, notice};
use rocket::State;
use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::serde::json::json;
use rocket::uri;
use sqlx::SqlitePool;
use tracing::info;
use validator::Validate;

const TAKEN_MESSAGE: &str = "That username is already taken.";

#[rocket::get("/register")]
pub fn register_page(flash: Option<FlashMessage<'_>>) -> Page {
    Page::render("register", json!({ "errors": {}, "values": {}, "notice": notice(flash) }))
}

fn register_redisplay(form: &RegisterForm, errors: rocket::serde::json::Value) -> FormResponse {
    FormResponse::Page(Page::render(
        "register",
        json!({
            "errors": errors,
            "values": { "username": form.username },
            "notice": null,
        }),
    ))
}

#[rocket::post("/register", data = "<form>")]
pub async fn register_submit(pool: &State<SqlitePool>, form: Form<RegisterForm>) -> Result<FormResponse, AppError> {
    if let Err(errors) = form.validate() {
        return Ok(register_redisplay(&form, json!(field_errors(&errors))));
    }

    let repo = SqliteRepository { pool: pool.inner().clone() };
    if repo.get_user_by_username(&form.username).await?.is_some() {
        return Ok(register_redisplay(&form, json!({ "username": [TAKEN_MESSAGE] })));
    }

    match repo.create_user(&form.username, &form.password).await {
        Ok(user) => {
            info!(user_id = user.id, username = %user.username, "user registered");
            Ok(FormResponse::Flash(Flash::success(
                Redirect::to(uri!(login_page)),
                "Registration successful! Please log in.",
            )))
        }
        // Lost the race against a concurrent registration; same answer as
        // the pre-check.
        Err(AppError::UsernameTaken(_)) => Ok(register_redisplay(&form, json!({ "username": [TAKEN_MESSAGE] }))),
        Err(e) => Err(e),
    }
}

#[rocket::get("/login")]
pub fn login_page(flash: Option<FlashMessage<'_>>) -> Page {
    Page::render("login", json!({ "errors": {}, "values": {}, "notice": notice(flash) }))
}

#[rocket::post("/login", data = "<form>")]
pub async fn login_submit(
    pool: &State<SqlitePool>,
    cookies: &CookieJar<'_>,
    form: Form<LoginForm>,
) -> Result<FormResponse, AppError> {
    if let Err(errors) = form.validate() {
        return Ok(FormResponse::Page(Page::render(
            "login",
            json!({
                "errors": field_errors(&errors),
                "values": { "username": form.username },
                "notice": null,
            }),
        )));
    }

    let repo = SqliteRepository { pool: pool.inner().clone() };
    if let Some(user) = repo.get_user_by_username(&form.username).await? {
        match repo.verify_password(&user, &form.password).await {
            Ok(()) => {
                auth::login(cookies, &user);
                info!(user_id = user.id, username = %user.username, "user logged in");
                return Ok(FormResponse::Redirect(Redirect::to(uri!(super::pages::dashboard))));
            }
            Err(AppError::InvalidCredentials) => {}
            Err(e) => return Err(e),
        }
    } else {
        // Equalize timing so the answer does not reveal whether the
        // username exists
        SqliteRepository::dummy_verify(&form.password);
    }

    // One generic notice for unknown username and wrong password alike
    Ok(FormResponse::Page(Page::render(
        "login",
        json!({
            "errors": {},
            "values": { "username": form.username },
            "notice": { "kind": "danger", "message": AppError::InvalidCredentials.to_string() },
        }),
    )))
}

#[rocket::get("/logout")]
pub fn logout(current_user: CurrentUser, cookies: &CookieJar<'_>) -> Redirect {
    auth::logout(cookies);
    info!(user_id = current_user.0.id, "user logged out");
    Redirect::to(uri!(super::pages::home))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{register_and_login, test_rocket};
    use rocket::http::{ContentType, Status};
    use rocket::local::asynchronous::Client;

    #[rocket::async_test]
    async fn register_then_login_reaches_dashboard() {
        let client = Client::tracked(test_rocket().await).await.expect("valid rocket");

        let response = client
            .post("/register")
            .header(ContentType::Form)
            .body("username=alice&password=secret1")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::SeeOther);
        assert_eq!(response.headers().get_one("Location"), Some("/login"));

        let response = client
            .post("/login")
            .header(ContentType::Form)
            .body("username=alice&password=secret1")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::SeeOther);
        assert_eq!(response.headers().get_one("Location"), Some("/dashboard"));

        let response = client.get("/dashboard").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
    }

    #[rocket::async_test]
    async fn invalid_registration_redisplays_with_errors() {
        let client = Client::tracked(test_rocket().await).await.expect("valid rocket");

        let response = client
            .post("/register")
            .header(ContentType::Form)
            .body("username=abc&password=short")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().await.expect("body");
        assert!(body.contains("Username must be between 4 and 150 characters."));
        assert!(body.contains("Password must be at least 6 characters."));
    }

    #[rocket::async_test]
    async fn duplicate_username_redisplays_and_keeps_original_account() {
        let client = Client::tracked(test_rocket().await).await.expect("valid rocket");

        let first = client
            .post("/register")
            .header(ContentType::Form)
            .body("username=bobby&password=secret1")
            .dispatch()
            .await;
        assert_eq!(first.status(), Status::SeeOther);

        let second = client
            .post("/register")
            .header(ContentType::Form)
            .body("username=bobby&password=different")
            .dispatch()
            .await;
        assert_eq!(second.status(), Status::Ok);
        let body = second.into_string().await.expect("body");
        assert!(body.contains("already taken"));

        // Original credentials still work, so only the first record exists
        let login = client
            .post("/login")
            .header(ContentType::Form)
            .body("username=bobby&password=secret1")
            .dispatch()
            .await;
        assert_eq!(login.status(), Status::SeeOther);
        assert_eq!(login.headers().get_one("Location"), Some("/dashboard"));
    }

    #[rocket::async_test]
    async fn login_failure_is_generic_for_unknown_user_and_wrong_password() {
        let client = Client::tracked(test_rocket().await).await.expect("valid rocket");
        let response = client
            .post("/register")
            .header(ContentType::Form)
            .body("username=alice&password=secret1")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::SeeOther);

        let wrong_password = client
            .post("/login")
            .header(ContentType::Form)
            .body("username=alice&password=nope-nope")
            .dispatch()
            .await;
        assert_eq!(wrong_password.status(), Status::Ok);
        let wrong_password_body = wrong_password.into_string().await.expect("body");

        let unknown_user = client
            .post("/login")
            .header(ContentType::Form)
            .body("username=nobody&password=nope-nope")
            .dispatch()
            .await;
        assert_eq!(unknown_user.status(), Status::Ok);
        let unknown_user_body = unknown_user.into_string().await.expect("body");

        assert!(wrong_password_body.contains("Invalid username or password."));
        // Identical notice either way: no account enumeration
        assert!(unknown_user_body.contains("Invalid username or password."));
    }

    #[rocket::async_test]
    async fn logout_ends_the_session() {
        let client = Client::tracked(test_rocket().await).await.expect("valid rocket");
        register_and_login(&client, "alice", "secret1").await;

        let response = client.get("/logout").dispatch().await;
        assert_eq!(response.status(), Status::SeeOther);
        assert_eq!(response.headers().get_one("Location"), Some("/"));

        let response = client.get("/dashboard").dispatch().await;
        assert_eq!(response.status(), Status::SeeOther);
        assert_eq!(response.headers().get_one("Location"), Some("/login"));

        // Logging out twice lands on the login redirect, not an error
        let response = client.get("/logout").dispatch().await;
        assert_eq!(response.status(), Status::SeeOther);
        assert_eq!(response.headers().get_one("Location"), Some("/login"));
    }
}
