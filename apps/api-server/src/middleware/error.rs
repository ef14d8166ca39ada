//! Error handling at the resource boundary.
//!
//! Every failure a handler can produce resolves here into an HTTP
//! status plus a `{"detail": ...}` body; nothing is swallowed and
//! nothing retries.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use std::fmt;

use pantry_core::error::RepoError;
use pantry_shared::response::ErrorDetail;

/// Application-level error type covering the client and server failure
/// modes of the resource layer.
#[derive(Debug)]
pub enum AppError {
    NotFound { entity: &'static str, id: i32 },
    Conflict(String),
    Unprocessable(String),
    Internal(String),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        AppError::NotFound { entity, id }
    }

    /// Map a repository failure from an operation where `NotFound`
    /// cannot occur (insert, or a lookup that returned `Ok(None)`).
    pub fn from_repo(entity: &'static str, err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => {
                tracing::debug!("Constraint violation on {}: {}", entity, msg);
                AppError::Conflict(format!("{entity} violates a unique constraint"))
            }
            RepoError::NotFound => {
                AppError::Internal(format!("unexpected miss from the {entity} repository"))
            }
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }

    /// Map a repository failure from an operation addressing one record,
    /// where `NotFound` is the expected miss.
    pub fn from_repo_at(entity: &'static str, id: i32, err: RepoError) -> Self {
        match err {
            RepoError::NotFound => Self::not_found(entity, id),
            other => Self::from_repo(entity, other),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound { entity, id } => write!(f, "{entity} {id} not found"),
            AppError::Conflict(msg) => write!(f, "Conflict: {msg}"),
            AppError::Unprocessable(msg) => write!(f, "Unprocessable: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            AppError::NotFound { entity, id } => ErrorDetail::not_found(entity, *id),
            AppError::Conflict(msg) => ErrorDetail::new(msg.clone()),
            AppError::Unprocessable(msg) => ErrorDetail::new(msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorDetail::new("Internal server error")
            }
        };

        HttpResponse::build(self.status_code()).json(detail)
    }
}

/// JSON extractor configuration: a payload that fails to deserialize is
/// rejected with 422 and the same `{"detail": ...}` body the other
/// client errors use, before any store access.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = AppError::Unprocessable(err.to_string()).error_response();
        actix_web::error::InternalError::from_response(err, response).into()
    })
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            AppError::not_found("Tea", 3).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("dup".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Unprocessable("bad".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn repo_not_found_maps_to_the_addressed_id() {
        let err = AppError::from_repo_at("Beer", 20, RepoError::NotFound);
        assert!(matches!(err, AppError::NotFound { entity: "Beer", id: 20 }));
    }

    #[test]
    fn repo_constraint_maps_to_conflict() {
        let err = AppError::from_repo("User", RepoError::Constraint("dup".to_string()));
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn repo_faults_map_to_internal() {
        let err = AppError::from_repo_at("Post", 1, RepoError::Query("boom".to_string()));
        assert!(matches!(err, AppError::Internal(_)));
    }
}
