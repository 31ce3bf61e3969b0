use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::invoice::{ApiError, InvoiceError};

use super::dtos::ErrorResponse;

/// Web error type that maps invoice errors to HTTP responses
#[derive(Debug)]
pub enum WebError {
  /// Rejected input (400 Bad Request)
  Validation(String),

  /// Invoicing API failure (upstream status or 502 Bad Gateway)
  Upstream(ApiError),

  /// Internal server error (500 Internal Server Error)
  Internal(String),
}

impl fmt::Display for WebError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      WebError::Validation(msg) => write!(f, "Validation error: {}", msg),
      WebError::Upstream(err) => write!(f, "{}", err),
      WebError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

/// Status returned to the browser for an upstream failure: the API's own 404
/// passes through, everything else is a bad gateway.
pub fn upstream_status(err: &ApiError) -> StatusCode {
  match err.status() {
    Some(404) => StatusCode::NOT_FOUND,
    _ => StatusCode::BAD_GATEWAY,
  }
}

impl ResponseError for WebError {
  fn status_code(&self) -> StatusCode {
    match self {
      WebError::Validation(_) => StatusCode::BAD_REQUEST,
      WebError::Upstream(err) => upstream_status(err),
      WebError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    let (error_type, message) = match self {
      WebError::Validation(msg) => ("validation_error", msg.clone()),
      WebError::Upstream(err) => ("upstream_error", err.message()),
      WebError::Internal(msg) => {
        // Don't expose internal error details
        tracing::error!("Internal error: {}", msg);
        (
          "internal_error",
          "An internal server error occurred".to_string(),
        )
      }
    };

    let error_response = ErrorResponse {
      error: error_type.to_string(),
      message,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(error_response)
  }
}

impl From<InvoiceError> for WebError {
  fn from(error: InvoiceError) -> Self {
    match error {
      InvoiceError::Validation(err) => WebError::Validation(err.to_string()),
      InvoiceError::Api(err) => WebError::Upstream(err),
    }
  }
}

impl From<tera::Error> for WebError {
  fn from(error: tera::Error) -> Self {
    WebError::Internal(format!("Template error: {}", error))
  }
}
