//! Clerk session validation settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClerkConfig {
    /// Backend secret used to fetch the instance's JWKS.
    #[serde(default)]
    pub secret_key: String,
}

impl ClerkConfig {
    /// Session tokens can be validated once a secret key is present.
    pub fn is_configured(&self) -> bool {
        !self.secret_key.trim().is_empty()
    }

    /// Whether the secret belongs to a Clerk development instance.
    pub fn is_test_instance(&self) -> bool {
        self.secret_key.trim().starts_with("sk_test_")
    }
}
