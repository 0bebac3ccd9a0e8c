pub mod sqlite_repository;

mod mood;
mod user;
