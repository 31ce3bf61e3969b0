use super::value_objects::ValueObjectError;
use thiserror::Error;

/// Boxed error raised by an `HttpTransport` implementation.
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure of a single invoicing API call.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Non-success HTTP status; `message` is the full user-facing text.
  #[error("{message}")]
  Status { status: u16, message: String },

  /// Connection, DNS or protocol failure, passed through unchanged.
  #[error("{0}")]
  Transport(#[source] TransportError),

  #[error("Failed to encode request body: {0}")]
  Encode(#[from] serde_json::Error),
}

impl ApiError {
  pub fn status(&self) -> Option<u16> {
    match self {
      ApiError::Status { status, .. } => Some(*status),
      _ => None,
    }
  }

  pub fn message(&self) -> String {
    self.to_string()
  }
}

#[derive(Debug, Error)]
pub enum InvoiceError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error(transparent)]
  Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_status_error_displays_message_only() {
    let err = ApiError::Status {
      status: 404,
      message: "API request failed with status 404: not found".to_string(),
    };

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.message(), "API request failed with status 404: not found");
  }

  #[test]
  fn test_transport_error_is_unchanged() {
    let source: TransportError = "connection refused".into();
    let err = ApiError::Transport(source);

    assert_eq!(err.status(), None);
    assert_eq!(err.to_string(), "connection refused");
  }
}
