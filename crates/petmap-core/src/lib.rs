//! Domain layer of the PetMap client.
//!
//! Holds the canonical marker model, the wire shapes exchanged with the
//! backend, the gateway capabilities that hide whether that backend is real
//! or simulated, and the in-memory marker store the UI renders from.

pub mod auth;
pub mod config;
pub mod error;
pub mod marker;
pub mod point;
pub mod user;

// Re-export common error type
pub use error::{PetMapError, Result};
