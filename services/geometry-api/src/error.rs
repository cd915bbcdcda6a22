//! API error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use geo_common::OrderParseError;
use serde::Serialize;
use thiserror::Error;
use wkt_parser::ParseError;

/// Errors returned by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The text could not be read as geometry.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Unknown `order` query value.
    #[error("Invalid parameter value for 'order': {0}")]
    InvalidOrder(#[from] OrderParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Parse(e) => e.code(),
            ApiError::InvalidOrder(_) => "InvalidParameterValue",
            ApiError::Internal(_) => "InternalError",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Parse(e) => StatusCode::from_u16(e.http_status_code())
                .unwrap_or(StatusCode::UNPROCESSABLE_ENTITY),
            ApiError::InvalidOrder(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(format!("JSON error: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
