use std::fmt::Display;

use axum::response::{IntoResponse, Response};
use reqwest::StatusCode;

/// Every failure surfaces as a 500; only the body differs.
pub enum ErrorResponse {
    InternalServerError,
    Message(&'static str),
}

pub trait MapErrorResponse<T> {
    fn map_err_response(self, mapper: ErrorResponse) -> Result<T, Response>;
}

impl<T, E: Display> MapErrorResponse<T> for Result<T, E> {
    fn map_err_response(self, mapper: ErrorResponse) -> Result<T, Response> {
        match self {
            Ok(val) => Ok(val),
            Err(err) => Err(mapper.transform(err)),
        }
    }
}

impl ErrorResponse {
    pub fn transform<E: Display>(&self, err: E) -> Response {
        tracing::warn!(error = %err, "search request failed");
        match self {
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            Self::Message(body) => (StatusCode::INTERNAL_SERVER_ERROR, *body).into_response(),
        }
    }
}
