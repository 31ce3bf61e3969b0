//! In-memory `HttpTransport` for unit tests.

use async_trait::async_trait;
use std::sync::Mutex;

use super::errors::TransportError;
use super::ports::{HttpRequest, HttpResponse, HttpTransport};

enum Reply {
  Response(HttpResponse),
  Failure(String),
}

/// Returns the same canned reply for every request and records what was sent.
pub struct StubTransport {
  reply: Reply,
  requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
  pub fn response(response: HttpResponse) -> Self {
    Self {
      reply: Reply::Response(response),
      requests: Mutex::new(Vec::new()),
    }
  }

  pub fn json(status: u16, body: serde_json::Value) -> Self {
    Self::response(HttpResponse {
      status,
      status_text: None,
      content_type: Some("application/json; charset=utf-8".to_string()),
      body: body.to_string().into_bytes(),
    })
  }

  pub fn bytes(status: u16, content_type: &str, body: Vec<u8>) -> Self {
    Self::response(HttpResponse {
      status,
      status_text: None,
      content_type: Some(content_type.to_string()),
      body,
    })
  }

  pub fn failing(message: &str) -> Self {
    Self {
      reply: Reply::Failure(message.to_string()),
      requests: Mutex::new(Vec::new()),
    }
  }

  pub fn last_request(&self) -> Option<HttpRequest> {
    self.requests.lock().unwrap().last().cloned()
  }

  pub fn request_count(&self) -> usize {
    self.requests.lock().unwrap().len()
  }
}

#[async_trait]
impl HttpTransport for StubTransport {
  async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
    self.requests.lock().unwrap().push(request);

    match &self.reply {
      Reply::Response(response) => Ok(response.clone()),
      Reply::Failure(message) => Err(message.clone().into()),
    }
  }
}
