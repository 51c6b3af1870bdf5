use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no session token in request")]
    MissingToken,

    #[error("token expired")]
    TokenExpired,

    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("JWKS validation failed: {0}")]
    JwksValidation(String),

    #[error("authentication is not configured")]
    NotConfigured,
}
