use serde::Deserialize;
use std::sync::Arc;

use crate::domain::invoice::{InvoiceApiClient, InvoiceError, InvoiceId, PdfBlob};

#[derive(Debug, Deserialize)]
pub struct DownloadInvoicePdfCommand {
  pub invoice_id: String,
}

#[derive(Debug)]
pub struct DownloadInvoicePdfResponse {
  pub file_name: String,
  pub pdf: PdfBlob,
}

pub struct DownloadInvoicePdfUseCase {
  client: Arc<InvoiceApiClient>,
}

impl DownloadInvoicePdfUseCase {
  pub fn new(client: Arc<InvoiceApiClient>) -> Self {
    Self { client }
  }

  pub async fn execute(
    &self,
    command: DownloadInvoicePdfCommand,
  ) -> Result<DownloadInvoicePdfResponse, InvoiceError> {
    let invoice_id = InvoiceId::new(command.invoice_id)?;

    let pdf = self.client.get_invoice_pdf(&invoice_id).await?;
    tracing::debug!(invoice_id = %invoice_id, bytes = pdf.len(), "Fetched invoice PDF");

    if pdf.is_empty() || !pdf.is_pdf() {
      tracing::warn!(
        invoice_id = %invoice_id,
        content_type = ?pdf.content_type,
        bytes = pdf.len(),
        "API returned an empty or non-PDF document"
      );
    }

    Ok(DownloadInvoicePdfResponse {
      file_name: format!("factura_{}.pdf", invoice_id),
      pdf,
    })
  }
}
