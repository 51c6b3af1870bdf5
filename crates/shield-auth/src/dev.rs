//! Authenticators for local development and unconfigured deployments.

use async_trait::async_trait;
use shield_core::identity::AuthIdentity;

use crate::Authenticator;
use crate::error::AuthError;

/// Longest token accepted as a development user ID.
const MAX_DEV_USER_ID: usize = 128;

/// Trusts the token itself as the user ID. Only enabled with `auth.dev_mode`.
///
/// A token of the form `user_id:email` also sets the email.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevAuthenticator;

#[async_trait]
impl Authenticator for DevAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<AuthIdentity, AuthError> {
        let token = token.trim();
        let (user_id, email) = match token.split_once(':') {
            Some((id, email)) if !email.is_empty() => (id, Some(email.to_string())),
            _ => (token, None),
        };

        if user_id.is_empty()
            || user_id.len() > MAX_DEV_USER_ID
            || user_id.chars().any(char::is_whitespace)
        {
            return Err(AuthError::MalformedToken("invalid development user id".into()));
        }

        Ok(AuthIdentity {
            user_id: user_id.to_string(),
            email,
            display_name: None,
        })
    }
}

/// Rejects every token. Used when neither Clerk nor development mode is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAuthenticator;

#[async_trait]
impl Authenticator for DisabledAuthenticator {
    async fn authenticate(&self, _token: &str) -> Result<AuthIdentity, AuthError> {
        Err(AuthError::NotConfigured)
    }
}
