use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::invoice::{FullInvoice, InvoiceApiClient, InvoiceError, InvoiceId};

#[derive(Debug, Deserialize)]
pub struct GetInvoiceDetailsCommand {
  pub invoice_id: String,
}

#[derive(Debug, Serialize)]
pub struct InvoiceDetailsResponse {
  pub invoice_id: String,
  /// Typed view when the document has the usual header/lines shape
  pub invoice: Option<FullInvoice>,
  /// Pretty-printed JSON or raw text, as returned by the API
  pub raw: String,
}

pub struct GetInvoiceDetailsUseCase {
  client: Arc<InvoiceApiClient>,
}

impl GetInvoiceDetailsUseCase {
  pub fn new(client: Arc<InvoiceApiClient>) -> Self {
    Self { client }
  }

  pub async fn execute(
    &self,
    command: GetInvoiceDetailsCommand,
  ) -> Result<InvoiceDetailsResponse, InvoiceError> {
    let invoice_id = InvoiceId::new(command.invoice_id)?;

    let payload = self.client.get_invoice(&invoice_id).await?;

    Ok(InvoiceDetailsResponse {
      invoice_id: invoice_id.into_inner(),
      invoice: FullInvoice::from_payload(&payload),
      raw: payload.to_display_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::{ClientConfig, ValueObjectError, testing::StubTransport};
  use serde_json::json;

  fn use_case(transport: Arc<StubTransport>) -> GetInvoiceDetailsUseCase {
    let client = InvoiceApiClient::new(ClientConfig::new("http://api.test/api/v1", "k"), transport);
    GetInvoiceDetailsUseCase::new(Arc::new(client))
  }

  #[tokio::test]
  async fn test_returns_typed_invoice() {
    let transport = Arc::new(StubTransport::json(
      200,
      json!({ "header": { "codigo": 123, "cliente1": "Acme" }, "lines": [] }),
    ));

    let response = use_case(transport)
      .execute(GetInvoiceDetailsCommand {
        invoice_id: "123".to_string(),
      })
      .await
      .unwrap();

    assert_eq!(response.invoice_id, "123");
    let invoice = response.invoice.unwrap();
    assert_eq!(invoice.header.cliente1.as_deref(), Some("Acme"));
    assert!(response.raw.contains("\"codigo\": 123"));
  }

  #[tokio::test]
  async fn test_opaque_document_keeps_raw_view() {
    let transport = Arc::new(StubTransport::json(200, json!({ "id": "123", "total": 99.5 })));

    let response = use_case(transport)
      .execute(GetInvoiceDetailsCommand {
        invoice_id: "123".to_string(),
      })
      .await
      .unwrap();

    assert!(response.invoice.is_none());
    assert!(response.raw.contains("\"total\": 99.5"));
  }

  #[tokio::test]
  async fn test_invalid_id_skips_request() {
    let transport = Arc::new(StubTransport::json(200, json!({})));

    let result = use_case(transport.clone())
      .execute(GetInvoiceDetailsCommand {
        invoice_id: "../etc".to_string(),
      })
      .await;

    assert!(matches!(
      result,
      Err(InvoiceError::Validation(ValueObjectError::InvalidInvoiceId(_)))
    ));
    assert_eq!(transport.request_count(), 0);
  }
}
