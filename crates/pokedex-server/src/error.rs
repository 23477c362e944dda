//! API errors and their HTTP mapping

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use pokedex::DomainError;

use crate::models::ApiResponse;

/// Everything a request can end with besides success
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("invalid request body: {0}")]
    BadRequest(String),

    #[error("validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("unauthorized - admin token missing/invalid")]
    Unauthorized,

    #[error("rate limit exceeded")]
    RateLimited { retry_after: Duration },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) | ApiError::BadRequest(_) | ApiError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::MaxLevelReached { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    fn messages(&self) -> Vec<String> {
        match self {
            ApiError::InvalidId(_) => vec!["Invalid ID.".to_string()],
            ApiError::BadRequest(detail) => vec![format!("Invalid request body: {}", detail)],
            ApiError::Validation(messages) => messages.clone(),
            ApiError::Domain(DomainError::NotFound { .. }) => {
                vec!["Pokemon not found.".to_string()]
            }
            ApiError::Domain(DomainError::MaxLevelReached { .. }) => {
                vec!["Maximum level reached.".to_string()]
            }
            ApiError::Unauthorized | ApiError::RateLimited { .. } => vec![self.to_string()],
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::<()>::error(self.messages()));
        let mut response = (self.status(), body).into_response();

        if let ApiError::RateLimited { retry_after } = self {
            // Round up so clients never retry inside the same window.
            let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            if let Ok(value) = HeaderValue::from_str(&secs.to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(DomainError::not_found(1)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(DomainError::MaxLevelReached { id: 1, level: 100 }).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::RateLimited {
                retry_after: Duration::from_secs(1)
            }
            .status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_rate_limited_sets_retry_after() {
        let response = ApiError::RateLimited {
            retry_after: Duration::from_millis(2_500),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "3");
    }
}
