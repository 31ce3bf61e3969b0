pub mod check_api_health;
pub mod download_invoice_pdf;
pub mod get_invoice_details;
pub mod update_fiscal_data;

pub use check_api_health::{ApiHealthResponse, CheckApiHealthUseCase, HealthStatus};
pub use download_invoice_pdf::{
  DownloadInvoicePdfCommand, DownloadInvoicePdfResponse, DownloadInvoicePdfUseCase,
};
pub use get_invoice_details::{
  GetInvoiceDetailsCommand, GetInvoiceDetailsUseCase, InvoiceDetailsResponse,
};
pub use update_fiscal_data::{
  UpdateFiscalDataCommand, UpdateFiscalDataResponse, UpdateFiscalDataUseCase,
};
