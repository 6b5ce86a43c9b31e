use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::response::ApiResponse;

#[derive(Error, Debug)]
pub enum CourierError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0} city not found")]
    CityNotFound(&'static str),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("File conversion failed: {0}")]
    ConversionFailed(String),

    #[error("File conversion timed out after {attempts} status checks")]
    ConversionTimeout { attempts: u32 },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for CourierError {
    fn into_response(self) -> Response {
        ApiResponse::<()>::from(self).into_response()
    }
}

pub type Result<T> = std::result::Result<T, CourierError>;
