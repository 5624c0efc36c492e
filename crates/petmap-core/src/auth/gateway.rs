//! Auth gateway capability.

use async_trait::async_trait;

use super::model::{SignInResponse, SignUpResponse};
use crate::error::Result;

/// Capability over the sign-in and sign-up endpoints.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchanges an email/password pair for a bearer token.
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse>;

    /// Registers a new account.
    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<SignUpResponse>;
}
