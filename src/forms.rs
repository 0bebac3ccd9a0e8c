//! Form input types, one per submission kind. Each pairs Rocket's `FromForm`
//! parsing with `validator` constraints; handlers call `validate()` and
//! either proceed with the typed value or feed `field_errors` back into the
//! form context.

use rocket::FromForm;
use std::collections::BTreeMap;
use validator::{Validate, ValidationErrors};

#[derive(Debug, FromForm, Validate)]
pub struct RegisterForm {
    #[field(default = String::new())]
    #[validate(length(min = 4, max = 150, message = "Username must be between 4 and 150 characters."))]
    pub username: String,
    #[field(default = String::new())]
    #[validate(length(min = 6, message = "Password must be at least 6 characters."))]
    pub password: String,
}

#[derive(Debug, FromForm, Validate)]
pub struct LoginForm {
    #[field(default = String::new())]
    #[validate(length(min = 1, message = "Username is required."))]
    pub username: String,
    #[field(default = String::new())]
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

#[derive(Debug, FromForm, Validate)]
pub struct MoodForm {
    #[field(default = String::new())]
    #[validate(length(min = 1, message = "Mood is required."))]
    pub mood: String,
    pub notes: Option<String>,
    // Known gap: the date is accepted exactly as submitted, with no
    // format or range check.
    #[field(default = String::new())]
    pub date: String,
}

#[derive(Debug, FromForm)]
pub struct ChatForm {
    #[field(default = String::new())]
    pub message: String,
}

/// Flattens validation failures into per-field message lists for the form
/// context.
pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errs)| {
            let messages = field_errs
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value for {}.", field),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}
