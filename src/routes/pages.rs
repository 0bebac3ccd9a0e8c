use crate::auth::CurrentUser;
use crate::render::{Page, notice};
use rocket::request::FlashMessage;
use rocket::serde::json::json;

#[rocket::get("/")]
pub fn home(flash: Option<FlashMessage<'_>>) -> Page {
    Page::render("home", json!({ "notice": notice(flash) }))
}

#[rocket::get("/dashboard")]
pub fn dashboard(current_user: CurrentUser, flash: Option<FlashMessage<'_>>) -> Page {
    Page::render(
        "dashboard",
        json!({
            "username": current_user.0.username,
            "notice": notice(flash),
        }),
    )
}

/// Sample resources; in production these would come from a store or an
/// external catalogue.
#[rocket::get("/resources")]
pub fn resources(_current_user: CurrentUser) -> Page {
    Page::render(
        "resources",
        json!({
            "resources": [
                { "title": "Managing Anxiety", "type": "Article", "link": "#" },
                { "title": "Depression Self-Help Video", "type": "Video", "link": "#" },
                { "title": "Stress Relief Exercises", "type": "Exercise", "link": "#" },
            ]
        }),
    )
}

#[rocket::get("/emergency")]
pub fn emergency() -> Page {
    Page::render("emergency", json!({}))
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{register_and_login, test_rocket};
    use rocket::http::{ContentType, Status};
    use rocket::local::asynchronous::Client;

    #[rocket::async_test]
    async fn home_and_emergency_are_public() {
        let client = Client::tracked(test_rocket().await).await.expect("valid rocket");
        for path in ["/", "/emergency"] {
            let response = client.get(path).dispatch().await;
            assert_eq!(response.status(), Status::Ok, "GET {path}");
        }
    }

    #[rocket::async_test]
    async fn protected_routes_redirect_anonymous_callers_to_login() {
        let client = Client::tracked(test_rocket().await).await.expect("valid rocket");
        for path in ["/dashboard", "/resources", "/mood_tracker", "/chat", "/admin", "/logout"] {
            let response = client.get(path).dispatch().await;
            assert_eq!(response.status(), Status::SeeOther, "GET {path}");
            assert_eq!(response.headers().get_one("Location"), Some("/login"), "GET {path}");
        }
    }

    #[rocket::async_test]
    async fn protected_posts_redirect_without_side_effects() {
        let client = Client::tracked(test_rocket().await).await.expect("valid rocket");

        let response = client
            .post("/mood_tracker")
            .header(ContentType::Form)
            .body("mood=Happy&date=2025-01-01")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::SeeOther);
        assert_eq!(response.headers().get_one("Location"), Some("/login"));

        let response = client
            .post("/chat")
            .header(ContentType::Form)
            .body("message=hello")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::SeeOther);
        assert_eq!(response.headers().get_one("Location"), Some("/login"));
    }

    #[rocket::async_test]
    async fn dashboard_shows_the_caller_identity() {
        let client = Client::tracked(test_rocket().await).await.expect("valid rocket");
        register_and_login(&client, "alice", "secret1").await;

        let response = client.get("/dashboard").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().await.expect("body");
        assert!(body.contains("alice"));
    }

    #[rocket::async_test]
    async fn resources_lists_the_fixed_catalogue() {
        let client = Client::tracked(test_rocket().await).await.expect("valid rocket");
        register_and_login(&client, "alice", "secret1").await;

        let response = client.get("/resources").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        let body = response.into_string().await.expect("body");
        assert!(body.contains("Managing Anxiety"));
        assert!(body.contains("Stress Relief Exercises"));
    }
}
