//! Translation of raw HTTP responses into payloads or `ApiError`s.

use serde_json::Value;

use super::entities::{ApiPayload, PdfBlob};
use super::errors::ApiError;
use super::ports::HttpResponse;

pub const API_ERROR_PREFIX: &str = "API request failed";
pub const PDF_ERROR_PREFIX: &str = "Failed to fetch PDF";

/// Shared handler for JSON/text endpoints.
///
/// Success bodies labelled `application/json` are parsed; anything else, or
/// JSON that fails to parse, comes back as text.
pub fn handle_response(response: HttpResponse) -> Result<ApiPayload, ApiError> {
  if !response.is_success() {
    return Err(ApiError::Status {
      status: response.status,
      message: api_error_message(API_ERROR_PREFIX, &response),
    });
  }

  if response.is_json() {
    if let Ok(value) = serde_json::from_slice::<Value>(&response.body) {
      return Ok(ApiPayload::Json(value));
    }
  }

  Ok(ApiPayload::Text(response.text()))
}

/// Handler for the PDF endpoint: bytes on success, never text-parsed.
pub fn handle_pdf_response(response: HttpResponse) -> Result<PdfBlob, ApiError> {
  if !response.is_success() {
    return Err(ApiError::Status {
      status: response.status,
      message: pdf_error_message(&response),
    });
  }

  Ok(PdfBlob {
    bytes: response.body,
    content_type: response.content_type,
  })
}

/// `{prefix} with status {status}` followed by, in priority order, the
/// server's `error` (plus ` ({details})`), or the status text.
pub fn api_error_message(prefix: &str, response: &HttpResponse) -> String {
  let mut message = format!("{} with status {}", prefix, response.status);
  let body = serde_json::from_slice::<Value>(&response.body).ok();

  if let Some(error) = body.as_ref().and_then(|b| field_text(b, "error")) {
    message.push_str(&format!(": {}", error));
    if let Some(details) = body.as_ref().and_then(|b| field_text(b, "details")) {
      message.push_str(&format!(" ({})", details));
    }
  } else if let Some(status_text) = response.status_text.as_deref().filter(|s| !s.is_empty()) {
    message.push_str(&format!(": {}", status_text));
  }

  message
}

/// PDF variant: only the server's `error` field is appended, no details and
/// no status text.
pub fn pdf_error_message(response: &HttpResponse) -> String {
  let mut message = format!("{} with status {}", PDF_ERROR_PREFIX, response.status);

  if let Some(error) = serde_json::from_slice::<Value>(&response.body)
    .ok()
    .as_ref()
    .and_then(|b| field_text(b, "error"))
  {
    message.push_str(&format!(": {}", error));
  }

  message
}

// Missing, null, false, 0 and "" all count as absent.
fn field_text(body: &Value, field: &str) -> Option<String> {
  match body.get(field)? {
    Value::Null | Value::Bool(false) => None,
    Value::String(s) if s.is_empty() => None,
    Value::String(s) => Some(s.clone()),
    Value::Number(n) if n.as_f64() == Some(0.0) => None,
    other => Some(other.to_string()),
  }
}
