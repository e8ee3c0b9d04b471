//! Request-level error type and its HTTP mapping.
//!
//! Every handler returns `Result<T, AppError>`. One mapping table decides
//! the status for each error kind, so the same failure produces the same
//! status no matter which route hit it: validation 400, missing or invalid
//! credentials 401, missing entities 404, persistence and storage failures
//! 500. Server errors are captured to Sentry on the way out, and 5xx
//! bodies keep the underlying message to aid debugging.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;
use crate::services::content::ContentError;
use crate::services::storage::StorageError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A repository call failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Credential verification or session lookup failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Page content operation failed.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Object storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// An entity the route needs does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request lacks a valid session token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Well-formed request that fails validation.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Catch-all for failures with no better classification.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Database(err) | Self::Content(ContentError::Repository(err)) => match err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Auth(err) => match err {
                AuthError::MissingCredentials => StatusCode::BAD_REQUEST,
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Content(err) => match err {
                ContentError::NoDraftToPublish => StatusCode::BAD_REQUEST,
                ContentError::VersionNotFound => StatusCode::NOT_FOUND,
                ContentError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Storage(err) => match err {
                StorageError::UnsupportedType(_) | StorageError::TooLarge { .. } => {
                    StatusCode::BAD_REQUEST
                }
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message for the JSON body.
    ///
    /// 5xx responses pass the underlying message through; everything else is
    /// already a message written for the client.
    fn message(&self) -> String {
        match self {
            Self::Database(err) | Self::Content(ContentError::Repository(err)) => match err {
                RepositoryError::NotFound => "Not found".to_string(),
                _ => err.to_string(),
            },
            Self::Auth(AuthError::Repository(err)) => err.to_string(),
            Self::Auth(err) => err.to_string(),
            Self::Content(err) => err.to_string(),
            Self::Storage(err) => err.to_string(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::BadRequest(msg) => msg.clone(),
            Self::Internal(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Only server errors are worth a Sentry event.
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

/// Shorthand used by every handler signature.
pub type Result<T> = std::result::Result<T, AppError>;

/// Attaches the admin's identity to the Sentry scope, so errors later in
/// the request carry it. Called after login and after token validation.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Drops the admin from the Sentry scope at logout.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Product".to_string());
        assert_eq!(err.to_string(), "Not found: Product");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            get_status(AppError::BadRequest("Name is required".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::MissingCredentials)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Content(ContentError::NoDraftToPublish)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Storage(StorageError::TooLarge {
                size: 11 * 1024 * 1024,
                max: 10 * 1024 * 1024,
            })),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Storage(StorageError::UnsupportedType(
                "application/pdf".to_string()
            ))),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_credential_failures_map_to_401() {
        assert_eq!(get_status(AppError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_missing_entities_map_to_404() {
        assert_eq!(
            get_status(AppError::NotFound("Product".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Content(ContentError::VersionNotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Database(RepositoryError::NotFound)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_persistence_failures_map_to_500() {
        assert_eq!(
            get_status(AppError::Database(RepositoryError::DataCorruption(
                "bad row".to_string()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        // Unknown email and wrong password must be indistinguishable
        assert_eq!(
            AppError::Auth(AuthError::InvalidCredentials).message(),
            "Invalid email or password"
        );
    }
}
