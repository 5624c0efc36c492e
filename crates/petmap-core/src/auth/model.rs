//! Authentication models.

use serde::{Deserialize, Serialize};

/// Credentials of the current browser session.
///
/// Created on sign-in and cleared on sign-out by the auth collaborator.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredentials {
    token: Option<String>,
}

impl SessionCredentials {
    /// Credentials for a signed-out session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Builds credentials from an optional token, treating blank tokens as absent.
    pub fn from_token(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Value for the `Authorization` header, if signed in.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }

    pub fn clear(&mut self) {
        self.token = None;
    }
}

// Never print the token itself.
impl std::fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Body of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResponse {
    pub token: String,
}

/// Body of a successful sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignUpResponse {
    #[serde(default)]
    pub message: String,
}
