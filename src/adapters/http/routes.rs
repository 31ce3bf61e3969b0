use actix_web::web;
use std::sync::Arc;

use crate::application::invoice::{
  CheckApiHealthUseCase, DownloadInvoicePdfUseCase, GetInvoiceDetailsUseCase,
  UpdateFiscalDataUseCase,
};
use crate::domain::invoice::InvoiceApiClient;

use super::handlers::{health, invoices_web, pages};
use super::templates::TemplateEngine;

/// Dependencies for web UI routes
#[derive(Clone)]
pub struct WebRouteDependencies {
  pub templates: TemplateEngine,
  pub get_invoice_details_use_case: Arc<GetInvoiceDetailsUseCase>,
  pub update_fiscal_data_use_case: Arc<UpdateFiscalDataUseCase>,
  pub download_invoice_pdf_use_case: Arc<DownloadInvoicePdfUseCase>,
  pub check_api_health_use_case: Arc<CheckApiHealthUseCase>,
}

impl WebRouteDependencies {
  /// Builds every use case around one shared API client
  pub fn new(templates: TemplateEngine, client: Arc<InvoiceApiClient>) -> Self {
    Self {
      templates,
      get_invoice_details_use_case: Arc::new(GetInvoiceDetailsUseCase::new(client.clone())),
      update_fiscal_data_use_case: Arc::new(UpdateFiscalDataUseCase::new(client.clone())),
      download_invoice_pdf_use_case: Arc::new(DownloadInvoicePdfUseCase::new(client.clone())),
      check_api_health_use_case: Arc::new(CheckApiHealthUseCase::new(client)),
    }
  }
}

/// Configure web UI routes
///
/// # Routes
///
/// - GET / - Welcome page
/// - GET /invoice/{invoice_id} - Invoice details with fiscal data form
/// - POST /invoice/{invoice_id} - Submit fiscal data
/// - GET /invoice/{invoice_id}/pdf - Download the invoice PDF
/// - GET /health - Front end and invoicing API health
/// - anything else - Not found page
pub fn configure_web_routes(cfg: &mut web::ServiceConfig, deps: WebRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.templates))
    .app_data(web::Data::new(deps.get_invoice_details_use_case))
    .app_data(web::Data::new(deps.update_fiscal_data_use_case))
    .app_data(web::Data::new(deps.download_invoice_pdf_use_case))
    .app_data(web::Data::new(deps.check_api_health_use_case));

  cfg
    .route("/", web::get().to(pages::home_page))
    .route("/health", web::get().to(health::health_check))
    .service(
      web::resource("/invoice/{invoice_id}")
        .route(web::get().to(invoices_web::invoice_page))
        .route(web::post().to(invoices_web::fiscal_data_submit)),
    )
    .route(
      "/invoice/{invoice_id}/pdf",
      web::get().to(invoices_web::invoice_pdf),
    )
    .default_service(web::to(pages::not_found_page));
}
