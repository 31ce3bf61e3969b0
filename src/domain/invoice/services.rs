use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::entities::{ApiPayload, PdfBlob};
use super::errors::ApiError;
use super::ports::{HttpMethod, HttpRequest, HttpTransport};
use super::responses::{handle_pdf_response, handle_response};
use super::value_objects::InvoiceId;

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Connection settings for the invoicing API
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
  /// Base endpoint, e.g. `http://localhost:8080/api/v1`
  pub base_url: String,
  /// Shared secret sent as `X-API-Key` on every request
  pub api_key: String,
}

impl ClientConfig {
  pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      api_key: api_key.into(),
    }
  }
}

impl fmt::Debug for ClientConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClientConfig")
      .field("base_url", &self.base_url)
      .field("api_key", &"<redacted>")
      .finish()
  }
}

/// Stateless wrapper around the invoicing API.
///
/// Holds only its configuration and a transport; every call is a single
/// one-shot request with no retries.
pub struct InvoiceApiClient {
  base_url: String,
  api_key: String,
  transport: Arc<dyn HttpTransport>,
}

impl InvoiceApiClient {
  pub fn new(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
    Self {
      base_url: config.base_url.trim_end_matches('/').to_string(),
      api_key: config.api_key,
      transport,
    }
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// `GET /invoices/{id}`
  pub async fn get_invoice(&self, id: &InvoiceId) -> Result<ApiPayload, ApiError> {
    let url = self.invoice_url(id);
    tracing::debug!("Fetching invoice from: {}", url);

    let request = self.authorized(HttpMethod::Get, url);
    self
      .send_json(request)
      .await
      .inspect_err(|e| tracing::error!(invoice_id = %id, "Error fetching invoice: {}", e))
  }

  /// `PUT /invoices/{id}` with `fiscal_data` as the JSON body.
  ///
  /// Any serializable value is accepted and sent unmodified.
  pub async fn update_invoice<T>(&self, id: &InvoiceId, fiscal_data: &T) -> Result<ApiPayload, ApiError>
  where
    T: Serialize + ?Sized,
  {
    let url = self.invoice_url(id);
    tracing::debug!("Submitting fiscal data to: {}", url);

    let body = serde_json::to_vec(fiscal_data)?;
    let request = self
      .authorized(HttpMethod::Put, url)
      .header("Content-Type", "application/json")
      .body(body);

    self
      .send_json(request)
      .await
      .inspect_err(|e| tracing::error!(invoice_id = %id, "Error submitting fiscal data: {}", e))
  }

  /// URL of the invoice PDF. No request is made.
  ///
  /// The API key is only ever sent as a header, so this link does not work
  /// for direct navigation against a protected endpoint. Use
  /// [`get_invoice_pdf`](Self::get_invoice_pdf) for authenticated retrieval.
  pub fn invoice_pdf_url(&self, id: &InvoiceId) -> String {
    let url = format!("{}/pdf", self.invoice_url(id));
    tracing::debug!("Generated PDF URL: {}", url);
    url
  }

  /// `GET /invoices/{id}/pdf`, returning the raw bytes.
  pub async fn get_invoice_pdf(&self, id: &InvoiceId) -> Result<PdfBlob, ApiError> {
    let url = self.invoice_pdf_url(id);
    tracing::debug!("Fetching PDF blob from: {}", url);

    let request = self.authorized(HttpMethod::Get, url);
    let result = match self.transport.send(request).await {
      Ok(response) => handle_pdf_response(response),
      Err(e) => Err(ApiError::Transport(e)),
    };

    result.inspect_err(|e| tracing::error!(invoice_id = %id, "Error fetching invoice PDF: {}", e))
  }

  /// `GET /health` on the API.
  pub async fn check_health(&self) -> Result<ApiPayload, ApiError> {
    let url = format!("{}/health", self.base_url);
    tracing::debug!("Checking API health at: {}", url);

    let request = self.authorized(HttpMethod::Get, url);
    self
      .send_json(request)
      .await
      .inspect_err(|e| tracing::error!("API health check failed: {}", e))
  }

  fn invoice_url(&self, id: &InvoiceId) -> String {
    format!("{}/invoices/{}", self.base_url, id.value())
  }

  fn authorized(&self, method: HttpMethod, url: String) -> HttpRequest {
    HttpRequest::new(method, url).header(API_KEY_HEADER, self.api_key.clone())
  }

  async fn send_json(&self, request: HttpRequest) -> Result<ApiPayload, ApiError> {
    let response = self
      .transport
      .send(request)
      .await
      .map_err(ApiError::Transport)?;

    handle_response(response)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::testing::StubTransport;
  use serde_json::json;
  use std::collections::HashMap;

  fn client(transport: Arc<StubTransport>) -> InvoiceApiClient {
    InvoiceApiClient::new(
      ClientConfig::new("http://localhost:8080/api/v1", "supersecretapikey"),
      transport,
    )
  }

  fn id(value: &str) -> InvoiceId {
    InvoiceId::new(value).unwrap()
  }

  #[tokio::test]
  async fn test_get_invoice_sends_get_with_api_key() {
    let transport = Arc::new(StubTransport::json(200, json!({ "id": "123", "total": 99.5 })));
    let client = client(transport.clone());

    let payload = client.get_invoice(&id("123")).await.unwrap();

    assert_eq!(payload, ApiPayload::Json(json!({ "id": "123", "total": 99.5 })));
    let request = transport.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url, "http://localhost:8080/api/v1/invoices/123");
    assert_eq!(request.header_value("x-api-key"), Some("supersecretapikey"));
    assert!(request.body.is_none());
  }

  #[tokio::test]
  async fn test_update_invoice_sends_json_body() {
    let transport = Arc::new(StubTransport::json(
      200,
      json!({ "invoice_id": 123, "message": "Invoice fiscal data updated successfully" }),
    ));
    let client = client(transport.clone());

    let mut fiscal_data = HashMap::new();
    fiscal_data.insert("cliente_nombre", "Acme");
    client.update_invoice(&id("123"), &fiscal_data).await.unwrap();

    let request = transport.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.url, "http://localhost:8080/api/v1/invoices/123");
    assert_eq!(request.header_value("X-API-Key"), Some("supersecretapikey"));
    assert_eq!(request.header_value("content-type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "cliente_nombre": "Acme" }));
  }

  #[tokio::test]
  async fn test_update_invoice_not_found() {
    let transport = Arc::new(StubTransport::json(404, json!({ "error": "not found" })));
    let client = client(transport);

    let err = client
      .update_invoice(&id("123"), &json!({ "cliente_nombre": "Acme" }))
      .await
      .unwrap_err();

    assert!(err.message().contains("status 404: not found"));
  }

  #[test]
  fn test_pdf_url_is_pure() {
    let transport = Arc::new(StubTransport::json(200, json!({})));
    let client = client(transport.clone());

    let url = client.invoice_pdf_url(&InvoiceId::from(42u64));

    assert_eq!(url, "http://localhost:8080/api/v1/invoices/42/pdf");
    assert_eq!(transport.request_count(), 0);
  }

  #[test]
  fn test_base_url_trailing_slash_is_trimmed() {
    let client = InvoiceApiClient::new(
      ClientConfig::new("https://api.example.com/v1/", "k"),
      Arc::new(StubTransport::json(200, json!({}))),
    );

    assert_eq!(client.base_url(), "https://api.example.com/v1");
    assert_eq!(
      client.invoice_pdf_url(&id("7")),
      "https://api.example.com/v1/invoices/7/pdf"
    );
  }

  #[tokio::test]
  async fn test_get_invoice_pdf_returns_bytes() {
    let bytes = b"%PDF-1.4 fake".to_vec();
    let transport = Arc::new(StubTransport::bytes(200, "application/pdf", bytes.clone()));
    let client = client(transport.clone());

    let blob = client.get_invoice_pdf(&id("123")).await.unwrap();

    assert_eq!(blob.bytes, bytes);
    let request = transport.last_request().unwrap();
    assert_eq!(request.url, "http://localhost:8080/api/v1/invoices/123/pdf");
    assert_eq!(request.header_value("X-API-Key"), Some("supersecretapikey"));
  }

  #[tokio::test]
  async fn test_transport_error_is_propagated() {
    let transport = Arc::new(StubTransport::failing("connection refused"));
    let client = client(transport);

    let err = client.get_invoice(&id("1")).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.to_string(), "connection refused");
  }

  #[tokio::test]
  async fn test_check_health_hits_health_endpoint() {
    let transport = Arc::new(StubTransport::json(200, json!({ "status": "UP" })));
    let client = client(transport.clone());

    let payload = client.check_health().await.unwrap();

    assert_eq!(payload.str_field("status"), Some("UP"));
    assert_eq!(
      transport.last_request().unwrap().url,
      "http://localhost:8080/api/v1/health"
    );
  }

  #[test]
  fn test_config_debug_redacts_api_key() {
    let config = ClientConfig::new("http://localhost", "supersecretapikey");
    let debug = format!("{:?}", config);

    assert!(debug.contains("<redacted>"));
    assert!(!debug.contains("supersecretapikey"));
  }
}
