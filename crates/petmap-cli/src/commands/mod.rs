pub mod auth;
pub mod points;
pub mod profile;
