//! User profile domain model.

use serde::{Deserialize, Serialize};

/// What the profile page shows about the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub description: String,
}

impl UserProfile {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Email with the local part hidden after its first two characters.
    ///
    /// `usuario@exemplo.com` becomes `us***@exemplo.com`. The domain starts
    /// after the last `@`. Addresses without `@` or with a one-character local
    /// part are returned unchanged.
    pub fn masked_email(&self) -> String {
        let Some((local, domain)) = self.email.rsplit_once('@') else {
            return self.email.clone();
        };
        if local.chars().count() < 2 {
            return self.email.clone();
        }
        let visible: String = local.chars().take(2).collect();
        format!("{}***@{}", visible, domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_email() {
        let profile = UserProfile::new("usuario@exemplo.com");
        assert_eq!(profile.masked_email(), "us***@exemplo.com");
    }

    #[test]
    fn test_masked_email_two_character_local_part() {
        assert_eq!(UserProfile::new("ab@x.io").masked_email(), "ab***@x.io");
    }

    #[test]
    fn test_masked_email_single_character_local_part() {
        assert_eq!(UserProfile::new("a@x.io").masked_email(), "a@x.io");
    }

    #[test]
    fn test_masked_email_splits_at_last_at() {
        assert_eq!(
            UserProfile::new("\"ana@home\"@exemplo.com").masked_email(),
            "\"a***@exemplo.com"
        );
    }

    #[test]
    fn test_masked_email_without_at() {
        assert_eq!(UserProfile::new("nobody").masked_email(), "nobody");
    }
}
