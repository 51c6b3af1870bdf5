use std::sync::Arc;

use async_trait::async_trait;
use clerk_rs::ClerkConfiguration;
use clerk_rs::clerk::Clerk;
use clerk_rs::validators::authorizer::validate_jwt;
use clerk_rs::validators::jwks::MemoryCacheJwksProvider;
use shield_core::identity::AuthIdentity;

use crate::Authenticator;
use crate::claims::{ShieldClaims, profile_from_claims};
use crate::error::AuthError;
use crate::token::decode_expiry;

/// Validates Clerk session tokens against the instance's JWKS.
///
/// One provider is built per authenticator and shared across requests; the
/// `MemoryCacheJwksProvider` caches public keys internally.
pub struct ClerkAuthenticator {
    provider: Arc<MemoryCacheJwksProvider>,
}

impl ClerkAuthenticator {
    #[must_use]
    pub fn new(secret_key: &str) -> Self {
        let config = ClerkConfiguration::new(None, None, Some(secret_key.to_string()), None);
        let clerk = Clerk::new(config);
        Self {
            provider: Arc::new(MemoryCacheJwksProvider::new(clerk)),
        }
    }

    /// Validate a session JWT and extract the claims JobShield uses.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MalformedToken` or `AuthError::TokenExpired` before
    /// any network call when the token is unusable, and
    /// `AuthError::JwksValidation` if signature validation fails.
    pub async fn validate(&self, jwt: &str) -> Result<ShieldClaims, AuthError> {
        if decode_expiry(jwt)? <= chrono::Utc::now() {
            return Err(AuthError::TokenExpired);
        }

        let clerk_jwt = validate_jwt(jwt, Arc::clone(&self.provider))
            .await
            .map_err(|e| AuthError::JwksValidation(e.to_string()))?;

        let expires_at = chrono::DateTime::from_timestamp(i64::from(clerk_jwt.exp), 0)
            .ok_or_else(|| AuthError::JwksValidation("invalid exp timestamp".into()))?;
        let (email, display_name) = profile_from_claims(&clerk_jwt.other);

        Ok(ShieldClaims {
            user_id: clerk_jwt.sub,
            email,
            display_name,
            expires_at,
        })
    }
}

#[async_trait]
impl Authenticator for ClerkAuthenticator {
    async fn authenticate(&self, token: &str) -> Result<AuthIdentity, AuthError> {
        let claims = self.validate(token).await?;
        Ok(claims.to_identity())
    }
}
