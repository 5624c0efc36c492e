//! User profile models.

mod model;

pub use model::UserProfile;
