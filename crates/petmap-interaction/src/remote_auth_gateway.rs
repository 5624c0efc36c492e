//! RemoteAuthGateway - REST implementation of sign-in and sign-up.

use async_trait::async_trait;
use petmap_core::{PetMapError, Result};
use petmap_core::auth::{AuthGateway, SignInResponse, SignUpResponse};
use petmap_core::config::{ClientConfig, DEFAULT_REQUEST_TIMEOUT_SECS};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::api_error::{ApiOperation, error_for_status, error_for_transport};

const AUTH_PATH: &str = "/auth";

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignUpRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Auth gateway backed by `{base}/auth/signin` and `{base}/auth/signup`.
#[derive(Debug, Clone)]
pub struct RemoteAuthGateway {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl RemoteAuthGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.base_url()).with_timeout(config.request_timeout())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Posts `body` and returns the raw response text of a 2xx reply.
    async fn post<B>(&self, operation: ApiOperation, endpoint: &str, body: &B) -> Result<String>
    where
        B: Serialize + Sync,
    {
        let url = format!("{}{}/{}", self.base_url, AUTH_PATH, endpoint);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| error_for_transport(operation, e))?;

        let status = response.status();
        if !operation.is_success(status) {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("POST {} failed with {}", url, status);
            return Err(error_for_status(operation, status, &body));
        }

        response
            .text()
            .await
            .map_err(|e| error_for_transport(operation, e))
    }
}

#[async_trait]
impl AuthGateway for RemoteAuthGateway {
    async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse> {
        let body = self
            .post(
                ApiOperation::SignIn,
                "signin",
                &SignInRequest { email, password },
            )
            .await?;
        serde_json::from_str(&body)
            .map_err(|e| PetMapError::malformed(format!("Unexpected sign-in response: {}", e)))
    }

    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<SignUpResponse> {
        let body = self
            .post(
                ApiOperation::SignUp,
                "signup",
                &SignUpRequest {
                    name,
                    email,
                    password,
                },
            )
            .await?;
        // Some deployments acknowledge with plain text instead of JSON.
        Ok(serde_json::from_str(&body).unwrap_or(SignUpResponse {
            message: body.trim().to_string(),
        }))
    }
}
