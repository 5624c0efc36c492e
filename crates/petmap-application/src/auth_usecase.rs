//! Auth use case: sign in, sign up, sign out.

use petmap_core::auth::{AuthGateway, SessionCredentials, SignUpResponse};
use petmap_core::{PetMapError, Result};
use std::sync::Arc;

/// Drives the auth gateway and hands out session credentials.
///
/// Where the token is kept between runs is up to the host application.
pub struct AuthUseCase {
    gateway: Arc<dyn AuthGateway>,
}

impl AuthUseCase {
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SessionCredentials> {
        let email = required("email", email)?;
        required("password", password)?;

        let response = self.gateway.sign_in(email, password).await?;
        tracing::info!("[AuthUseCase] Signed in as {}", email);
        Ok(SessionCredentials::signed_in(response.token))
    }

    pub async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<SignUpResponse> {
        let name = required("name", name)?;
        let email = required("email", email)?;
        required("password", password)?;

        let response = self.gateway.sign_up(name, email, password).await?;
        tracing::info!("[AuthUseCase] Registered {}", email);
        Ok(response)
    }

    pub fn sign_out(&self, credentials: &mut SessionCredentials) {
        credentials.clear();
        tracing::info!("[AuthUseCase] Signed out");
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(PetMapError::validation(format!("{} is required", field)))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petmap_infrastructure::MockAuthGateway;
    use petmap_infrastructure::mock_auth_gateway::MOCK_TOKEN;
    use std::time::Duration;

    fn use_case() -> AuthUseCase {
        AuthUseCase::new(Arc::new(MockAuthGateway::new().with_latency(Duration::ZERO)))
    }

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let auth = use_case();
        let mut credentials = auth.sign_in("ana@example.com", "secret").await.unwrap();
        assert_eq!(credentials.token(), Some(MOCK_TOKEN));

        auth.sign_out(&mut credentials);
        assert!(!credentials.is_authenticated());
    }

    #[tokio::test]
    async fn test_blank_fields_are_rejected() {
        let auth = use_case();
        assert!(auth.sign_in(" ", "secret").await.unwrap_err().is_validation());
        assert!(auth.sign_in("ana@example.com", "").await.unwrap_err().is_validation());
        assert!(auth.sign_up("", "a@b.c", "pw").await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn test_sign_up() {
        let response = use_case().sign_up("Ana", "ana@example.com", "secret").await.unwrap();
        assert!(!response.message.is_empty());
    }
}
