use async_trait::async_trait;
use reqwest::{Client, Method, header::CONTENT_TYPE};

use crate::domain::invoice::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// `HttpTransport` backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
  client: Client,
}

impl ReqwestTransport {
  pub fn new() -> Self {
    Self {
      client: Client::new(),
    }
  }

  pub fn with_client(client: Client) -> Self {
    Self { client }
  }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
  match method {
    HttpMethod::Get => Method::GET,
    HttpMethod::Put => Method::PUT,
  }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
  async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
    let mut builder = self
      .client
      .request(to_reqwest_method(request.method), &request.url);

    for (name, value) in &request.headers {
      builder = builder.header(name.as_str(), value.as_str());
    }

    if let Some(body) = request.body {
      builder = builder.body(body);
    }

    let response = builder.send().await?;

    let status = response.status();
    let content_type = response
      .headers()
      .get(CONTENT_TYPE)
      .and_then(|v| v.to_str().ok())
      .map(str::to_string);
    let body = response.bytes().await?.to_vec();

    Ok(HttpResponse {
      status: status.as_u16(),
      status_text: status.canonical_reason().map(str::to_string),
      content_type,
      body,
    })
  }
}
