use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use shield_core::identity::AuthIdentity;

/// Validated session claims.
///
/// Wraps the fields JobShield needs from a Clerk session token. Produced by
/// [`crate::ClerkAuthenticator`], turned into an [`AuthIdentity`] for the
/// HTTP layer.
#[derive(Debug, Clone)]
pub struct ShieldClaims {
    /// Clerk user ID (`sub` claim).
    pub user_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    /// Token expiration time (from `exp` claim).
    pub expires_at: DateTime<Utc>,
}

impl ShieldClaims {
    #[must_use]
    pub fn to_identity(&self) -> AuthIdentity {
        AuthIdentity {
            user_id: self.user_id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Profile fields from custom session-token claims.
///
/// Clerk session templates commonly expose `email`, and either `name` or
/// `first_name`/`last_name`. Missing or non-string claims yield `None`.
#[must_use]
pub fn profile_from_claims(other: &Map<String, Value>) -> (Option<String>, Option<String>) {
    let text = |key: &str| {
        other
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
    };

    let email = text("email").or_else(|| text("primary_email"));
    let display_name = text("name").or_else(|| {
        let joined = [text("first_name"), text("last_name")]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        (!joined.is_empty()).then_some(joined)
    });

    (email, display_name)
}
