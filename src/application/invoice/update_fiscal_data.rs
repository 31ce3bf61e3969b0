use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::invoice::{FiscalData, InvoiceApiClient, InvoiceError, InvoiceId};

const DEFAULT_SUCCESS_MESSAGE: &str = "Fiscal data updated";

#[derive(Debug, Deserialize)]
pub struct UpdateFiscalDataCommand {
  pub invoice_id: String,
  pub fiscal_data: FiscalData,
}

#[derive(Debug, Serialize)]
pub struct UpdateFiscalDataResponse {
  pub invoice_id: String,
  pub message: String,
}

pub struct UpdateFiscalDataUseCase {
  client: Arc<InvoiceApiClient>,
}

impl UpdateFiscalDataUseCase {
  pub fn new(client: Arc<InvoiceApiClient>) -> Self {
    Self { client }
  }

  pub async fn execute(
    &self,
    command: UpdateFiscalDataCommand,
  ) -> Result<UpdateFiscalDataResponse, InvoiceError> {
    let invoice_id = InvoiceId::new(command.invoice_id)?;
    let fiscal_data = command.fiscal_data.validated().inspect_err(|e| {
      tracing::warn!(invoice_id = %invoice_id, "Rejected fiscal data: {}", e);
    })?;

    let payload = self.client.update_invoice(&invoice_id, &fiscal_data).await?;

    let message = payload
      .str_field("message")
      .unwrap_or(DEFAULT_SUCCESS_MESSAGE)
      .to_string();

    tracing::info!(invoice_id = %invoice_id, "Fiscal data updated");

    Ok(UpdateFiscalDataResponse {
      invoice_id: invoice_id.into_inner(),
      message,
    })
  }
}
