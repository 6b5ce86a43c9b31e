//! # Response Envelope & Error Contract
//!
//! Every endpoint returns an [`ApiResponse<T>`] envelope with two optional
//! top-level fields:
//!
//! ```json
//! {
//!   "data": [ ... ],                                        // present on success
//!   "error": { "code": "invalid_request", "message": "..." } // present on error
//! }
//! ```
//!
//! Validation failures and domain rejections (such as an unknown origin city)
//! surface their message verbatim. Upstream failures are logged and reported
//! as `"Internal server error"`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::CourierError;

/// Message returned for every failure whose details stay server-side.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Message returned when the conversion service reports a failed job.
pub const CONVERSION_FAILED_MESSAGE: &str = "File conversion failed";

/// Message returned when a conversion job never reaches a terminal state.
pub const CONVERSION_TIMEOUT_MESSAGE: &str = "File conversion timed out";

/// Machine-readable error code included in every error response.
///
/// Serialized as a snake_case string on the wire (e.g. `"invalid_request"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request was malformed or failed validation. HTTP 400.
    InvalidRequest,
    /// No route matches the request. HTTP 404.
    NotFound,
    /// An upstream or server-side failure. HTTP 500.
    InternalError,
}

impl ErrorCode {
    /// Returns the HTTP status code corresponding to this error code.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequest => write!(f, "invalid_request"),
            Self::NotFound => write!(f, "not_found"),
            Self::InternalError => write!(f, "internal_error"),
        }
    }
}

/// Structured error payload within the envelope.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiError {
    /// Machine-readable error classification.
    pub code: ErrorCode,
    /// Human-readable description safe to display to end users.
    pub message: String,
}

/// Canonical response envelope.
///
/// On success `data` is present and `error` is absent; on error the reverse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,

    /// HTTP status to use in the response. Not serialized on the wire.
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// Success response with data (HTTP 200).
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            status: StatusCode::OK,
        }
    }

    /// Resource created response (HTTP 201).
    pub fn created(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            status: StatusCode::CREATED,
        }
    }

    /// Error response. HTTP status is derived from the [`ErrorCode`].
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        let status = code.status();
        Self {
            data: None,
            error: Some(ApiError {
                code,
                message: message.into(),
            }),
            status,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        match serde_json::to_value(&self) {
            Ok(body) => (status, Json(body)).into_response(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response body");
                let body = serde_json::json!({
                    "error": {
                        "code": "internal_error",
                        "message": INTERNAL_ERROR_MESSAGE
                    }
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl<T: Serialize> From<CourierError> for ApiResponse<T> {
    /// Internal error details are never leaked to the client; they are
    /// logged via `tracing::error!` and replaced with a generic message.
    fn from(err: CourierError) -> Self {
        match err {
            CourierError::Validation(ref msg) => {
                ApiResponse::error(ErrorCode::InvalidRequest, msg.clone())
            }

            CourierError::CityNotFound(_) => {
                ApiResponse::error(ErrorCode::InvalidRequest, err.to_string())
            }

            CourierError::ConversionFailed(ref reason) => {
                tracing::error!(reason = %reason, "Conversion job ended in ERROR state");
                ApiResponse::error(ErrorCode::InternalError, CONVERSION_FAILED_MESSAGE)
            }

            CourierError::ConversionTimeout { attempts } => {
                tracing::error!(attempts, "Conversion job did not finish in time");
                ApiResponse::error(ErrorCode::InternalError, CONVERSION_TIMEOUT_MESSAGE)
            }

            ref internal @ (CourierError::Http(_)
            | CourierError::UrlParse(_)
            | CourierError::Upstream(_)
            | CourierError::UpstreamUnavailable(_)
            | CourierError::Internal(_)) => {
                tracing::error!(error = %internal, "Internal error mapped to response");
                ApiResponse::error(ErrorCode::InternalError, INTERNAL_ERROR_MESSAGE)
            }
        }
    }
}
