mod auth;
mod config;
mod database;
mod db;
mod error;
mod forms;
mod middleware;
mod models;
mod render;
mod routes;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;

use crate::db::stage_db;
use crate::middleware::RequestLogger;
use crate::routes as app_routes;
use rocket::{Build, Rocket, catchers, routes};
use tracing_subscriber::EnvFilter;

fn init_tracing(log_level: &str, json_format: bool) {
    // RUST_LOG overrides the configured level for fine-grained control,
    // e.g. RUST_LOG=info,mindcare::routes=debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(true).with_line_number(true);

    if json_format {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn ensure_rocket_secret_key() {
    let profile = std::env::var("ROCKET_PROFILE").unwrap_or_else(|_| "debug".to_string());

    // Private session cookies need a stable key outside of debug
    if profile != "debug" && std::env::var("ROCKET_SECRET_KEY").is_err() {
        panic!(
            "ROCKET_SECRET_KEY is required for profile '{}'. Generate one with: openssl rand -base64 32",
            profile
        );
    }
}

fn server_figment(config: &Config) -> rocket::figment::Figment {
    rocket::Config::figment()
        .merge(("address", config.server.address.clone()))
        .merge(("port", config.server.port))
}

pub(crate) fn mount_routes(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket
        .mount(
            "/",
            routes![
                app_routes::pages::home,
                app_routes::pages::dashboard,
                app_routes::pages::resources,
                app_routes::pages::emergency,
                app_routes::user::register_page,
                app_routes::user::register_submit,
                app_routes::user::login_page,
                app_routes::user::login_submit,
                app_routes::user::logout,
                app_routes::mood::mood_tracker_page,
                app_routes::mood::log_mood,
                app_routes::chat::chat_page,
                app_routes::chat::chat_message,
                app_routes::admin::admin_page,
            ],
        )
        .register("/", catchers![app_routes::error::unauthorized, app_routes::error::not_found])
}

pub fn build_rocket(config: Config) -> Rocket<Build> {
    init_tracing(&config.logging.level, config.logging.json_format);
    ensure_rocket_secret_key();

    let rocket = rocket::custom(server_figment(&config))
        .attach(RequestLogger)
        .attach(stage_db(config.database));

    mount_routes(rocket)
}
