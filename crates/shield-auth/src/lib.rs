//! # shield-auth
//!
//! Request authentication for JobShield.
//!
//! Extracts the session token from a request (`Authorization: Bearer` or the
//! `__session` cookie), validates it against Clerk's JWKS (`clerk-rs`), and
//! yields an [`AuthIdentity`] for the HTTP layer. A development authenticator
//! that trusts the token as the user ID is available behind `auth.dev_mode`.

pub mod claims;
mod dev;
pub mod error;
mod jwks;
pub mod token;

use std::sync::Arc;

use async_trait::async_trait;
use shield_config::ShieldConfig;
use shield_core::identity::AuthIdentity;

pub use claims::ShieldClaims;
pub use dev::{DevAuthenticator, DisabledAuthenticator};
pub use error::AuthError;
pub use jwks::ClerkAuthenticator;

/// Turns a session token into an identity.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// # Errors
    ///
    /// Returns `AuthError` if the token is malformed, expired, or fails validation.
    async fn authenticate(&self, token: &str) -> Result<AuthIdentity, AuthError>;
}

/// Pick the authenticator for this deployment.
///
/// Development mode wins over Clerk so local runs never need network access.
/// With neither configured, every request is rejected.
#[must_use]
pub fn authenticator_from_config(config: &ShieldConfig) -> Arc<dyn Authenticator> {
    if config.auth.dev_mode {
        tracing::warn!("auth.dev_mode is on: bearer tokens are trusted as user ids");
        return Arc::new(DevAuthenticator);
    }
    if config.clerk.is_configured() {
        tracing::info!(
            test_instance = config.clerk.is_test_instance(),
            "validating sessions with clerk"
        );
        return Arc::new(ClerkAuthenticator::new(config.clerk.secret_key.trim()));
    }
    tracing::warn!("no authentication configured: all API requests will be rejected");
    Arc::new(DisabledAuthenticator)
}
