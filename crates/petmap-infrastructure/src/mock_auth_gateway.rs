//! Mock auth gateway.

use async_trait::async_trait;
use petmap_core::Result;
use petmap_core::auth::{AuthGateway, SignInResponse, SignUpResponse};
use petmap_core::config::DEFAULT_MOCK_LATENCY_MS;
use std::time::Duration;

pub const MOCK_TOKEN: &str = "mock-auth-token-123";

/// Accepts any credentials after a simulated delay.
#[derive(Debug, Clone)]
pub struct MockAuthGateway {
    latency: Duration,
}

impl MockAuthGateway {
    pub fn new() -> Self {
        Self {
            latency: Duration::from_millis(DEFAULT_MOCK_LATENCY_MS),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for MockAuthGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn sign_in(&self, _email: &str, _password: &str) -> Result<SignInResponse> {
        tracing::info!("MOCK API: simulating successful sign-in");
        tokio::time::sleep(self.latency).await;
        Ok(SignInResponse {
            token: MOCK_TOKEN.to_string(),
        })
    }

    async fn sign_up(&self, _name: &str, _email: &str, _password: &str) -> Result<SignUpResponse> {
        tracing::info!("MOCK API: simulating successful sign-up");
        tokio::time::sleep(self.latency).await;
        Ok(SignUpResponse {
            message: "User registered successfully (mock).".to_string(),
        })
    }
}
