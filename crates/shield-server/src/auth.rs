//! Request authentication extractor.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use shield_auth::AuthError;
use shield_auth::token::extract_token;
use shield_core::entities::{NewUser, User};

use crate::error::ServiceError;
use crate::state::AppState;

/// The authenticated user behind a request.
///
/// Extraction validates the session token and upserts the user row from the
/// identity claims, so every authenticated request refreshes the profile.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ServiceError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let authorization = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        let cookies = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect::<Vec<_>>()
            .join("; ");
        let cookie = (!cookies.is_empty()).then_some(cookies.as_str());

        let token = extract_token(authorization, cookie).ok_or(AuthError::MissingToken)?;
        let identity = state.authenticator.authenticate(&token).await?;
        let user = state.store.upsert_user(&NewUser::from(&identity)).await?;
        Ok(Self(user))
    }
}
