//! Domain models

pub mod user;

pub use user::{seed_users, User};
