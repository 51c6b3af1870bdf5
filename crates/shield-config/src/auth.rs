//! Authentication mode configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Trust the bearer token itself as the user ID. Local development and
    /// tests only; never enable alongside real users.
    #[serde(default)]
    pub dev_mode: bool,
}
