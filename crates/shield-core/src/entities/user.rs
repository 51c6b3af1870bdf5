use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::AuthIdentity;

/// An authenticated principal, materialized from identity claims.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl From<&AuthIdentity> for NewUser {
    fn from(identity: &AuthIdentity) -> Self {
        Self {
            id: identity.user_id.clone(),
            email: identity.email.clone(),
            display_name: identity.display_name.clone(),
        }
    }
}
