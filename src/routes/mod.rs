pub mod admin;
pub mod chat;
pub mod error;
pub mod mood;
pub mod pages;
pub mod user;
