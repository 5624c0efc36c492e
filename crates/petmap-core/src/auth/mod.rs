//! Authentication models and the auth gateway capability.
//!
//! Token storage belongs to the host application; the core only reads the
//! credentials it is handed.

mod gateway;
mod model;

pub use gateway::AuthGateway;
pub use model::{SessionCredentials, SignInResponse, SignUpResponse};
