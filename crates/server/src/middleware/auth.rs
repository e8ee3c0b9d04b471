//! Admin authentication extractor.
//!
//! Validates the `Authorization: Bearer` token on every protected route:
//! the session row must exist, must not be expired, and its owning admin
//! must still be active. All three are resolved in one joined query.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

use crate::db::SessionRepository;
use crate::error::{self, AppError};
use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Extractor that requires a valid admin session.
///
/// ```rust,ignore
/// async fn whoami(RequireAdminAuth(admin): RequireAdminAuth) -> String {
///     admin.email
/// }
/// ```
pub struct RequireAdminAuth(pub CurrentAdmin);

impl FromRequestParts<AppState> for RequireAdminAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AppError::Unauthorized)?;

        let admin = SessionRepository::new(state.pool())
            .find_current_admin(token)
            .await?
            .ok_or(AppError::Unauthorized)?;

        // Associate any later error in this request with the admin.
        error::set_sentry_user(&admin.id, Some(&admin.email));

        Ok(Self(admin))
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracts_token() {
        let headers = headers_with_auth("Bearer abc123def");
        assert_eq!(bearer_token(&headers), Some("abc123def"));
    }

    #[test]
    fn test_bearer_token_requires_scheme() {
        assert_eq!(bearer_token(&headers_with_auth("abc123def")), None);
        assert_eq!(bearer_token(&headers_with_auth("Basic abc123def")), None);
    }

    #[test]
    fn test_bearer_token_rejects_empty_token() {
        assert_eq!(bearer_token(&headers_with_auth("Bearer ")), None);
        assert_eq!(bearer_token(&headers_with_auth("Bearer   ")), None);
    }

    #[test]
    fn test_bearer_token_missing_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }
}
