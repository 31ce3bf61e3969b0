use serde::Serialize;
use std::sync::Arc;

use crate::domain::invoice::InvoiceApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
  Up,
  Down,
}

#[derive(Debug, Serialize)]
pub struct ApiHealthResponse {
  pub status: HealthStatus,
  /// Upstream payload when reachable, otherwise a short failure summary
  pub api: serde_json::Value,
}

const UNREACHABLE: &str = "unreachable";

pub struct CheckApiHealthUseCase {
  client: Arc<InvoiceApiClient>,
}

impl CheckApiHealthUseCase {
  pub fn new(client: Arc<InvoiceApiClient>) -> Self {
    Self { client }
  }

  pub async fn execute(&self) -> ApiHealthResponse {
    match self.client.check_health().await {
      Ok(payload) => {
        let api = payload
          .as_json()
          .cloned()
          .unwrap_or_else(|| serde_json::Value::String(payload.to_display_string()));
        ApiHealthResponse {
          status: HealthStatus::Up,
          api,
        }
      }
      Err(e) => {
        // Transport errors name the upstream address; keep them in the logs
        tracing::warn!("Invoicing API is down: {}", e);
        let summary = match e.status() {
          Some(status) => format!("API responded with status {}", status),
          None => UNREACHABLE.to_string(),
        };
        ApiHealthResponse {
          status: HealthStatus::Down,
          api: serde_json::Value::String(summary),
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::{ClientConfig, testing::StubTransport};
  use serde_json::json;

  fn use_case(transport: Arc<StubTransport>) -> CheckApiHealthUseCase {
    let client = InvoiceApiClient::new(ClientConfig::new("http://api.test/api/v1", "k"), transport);
    CheckApiHealthUseCase::new(Arc::new(client))
  }

  #[tokio::test]
  async fn test_up() {
    let transport = Arc::new(StubTransport::json(200, json!({ "status": "UP" })));

    let response = use_case(transport).execute().await;

    assert_eq!(response.status, HealthStatus::Up);
    assert_eq!(response.api, json!({ "status": "UP" }));
  }

  #[tokio::test]
  async fn test_down_on_unavailable() {
    let transport = Arc::new(StubTransport::json(
      503,
      json!({ "status": "DOWN", "database_status": "DOWN" }),
    ));

    let response = use_case(transport).execute().await;

    assert_eq!(response.status, HealthStatus::Down);
    assert_eq!(response.api, json!("API responded with status 503"));
  }

  #[tokio::test]
  async fn test_down_on_transport_failure() {
    let transport = Arc::new(StubTransport::failing(
      "error sending request for url (http://10.0.0.5:8080/api/v1/health): connection refused",
    ));

    let response = use_case(transport).execute().await;

    assert_eq!(response.status, HealthStatus::Down);
    assert_eq!(response.api, json!("unreachable"));
  }
}
