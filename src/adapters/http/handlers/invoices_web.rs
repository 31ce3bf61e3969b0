use actix_web::{HttpRequest, HttpResponse, http::StatusCode, http::header, web};
use std::sync::Arc;

use crate::adapters::http::{
  dtos::FiscalDataForm,
  errors::{WebError, upstream_status},
  middleware::RequestIdExt,
  templates::TemplateEngine,
};
use crate::application::invoice::{
  DownloadInvoicePdfCommand, DownloadInvoicePdfUseCase, GetInvoiceDetailsCommand,
  GetInvoiceDetailsUseCase, InvoiceDetailsResponse, UpdateFiscalDataCommand,
  UpdateFiscalDataUseCase,
};
use crate::domain::invoice::{FiscalData, InvoiceError};

/// Everything the invoice page template can show
#[derive(Default)]
struct InvoicePage {
  invoice_id: String,
  details: Option<InvoiceDetailsResponse>,
  form: Option<FiscalData>,
  notice: Option<String>,
  error: Option<String>,
}

fn error_status(error: &InvoiceError) -> StatusCode {
  match error {
    InvoiceError::Validation(_) => StatusCode::BAD_REQUEST,
    InvoiceError::Api(err) => upstream_status(err),
  }
}

// Tag failures with the request ID so they can be matched to access logs
fn log_failure(req: &HttpRequest, invoice_id: &str, error: &InvoiceError) {
  let request_id = req.request_id().map(|id| id.to_string()).unwrap_or_default();
  match error {
    InvoiceError::Validation(_) => {
      tracing::info!(request_id = %request_id, invoice_id, "Rejected input: {}", error)
    }
    InvoiceError::Api(_) => {
      tracing::warn!(request_id = %request_id, invoice_id, "Invoicing API call failed: {}", error)
    }
  }
}

// Pre-fill the form with the fiscal fields currently stored on the invoice
fn form_from_details(details: &InvoiceDetailsResponse) -> FiscalData {
  match &details.invoice {
    Some(invoice) => FiscalData {
      cliente_nombre: invoice.header.cliente1.clone(),
      cliente_direccion: invoice.header.cliente2.clone(),
      cliente_nif: invoice.header.cliente3.clone(),
      cliente_email: invoice.header.cliente4.clone(),
    },
    None => FiscalData::default(),
  }
}

fn render_invoice_page(
  templates: &TemplateEngine,
  status: StatusCode,
  page: InvoicePage,
) -> Result<HttpResponse, WebError> {
  let mut context = tera::Context::new();
  context.insert("title", &format!("Invoice {}", page.invoice_id));
  context.insert("invoice_id", &page.invoice_id);
  context.insert("loaded", &page.details.is_some());
  context.insert("notice", &page.notice);
  context.insert("error", &page.error);
  context.insert("form", &page.form);

  if let Some(details) = &page.details {
    context.insert("invoice", &details.invoice);
    context.insert("raw", &details.raw);
  }

  let html = templates.render("pages/invoice.html.tera", &context)?;

  Ok(HttpResponse::build(status).content_type("text/html").body(html))
}

// GET /invoice/{invoice_id} - Show invoice details
pub async fn invoice_page(
  req: HttpRequest,
  path: web::Path<String>,
  templates: web::Data<TemplateEngine>,
  get_invoice_details_use_case: web::Data<Arc<GetInvoiceDetailsUseCase>>,
) -> Result<HttpResponse, WebError> {
  let invoice_id = path.into_inner();

  match get_invoice_details_use_case
    .execute(GetInvoiceDetailsCommand {
      invoice_id: invoice_id.clone(),
    })
    .await
  {
    Ok(details) => {
      let form = form_from_details(&details);
      render_invoice_page(
        &templates,
        StatusCode::OK,
        InvoicePage {
          invoice_id: details.invoice_id.clone(),
          form: Some(form),
          details: Some(details),
          ..Default::default()
        },
      )
    }
    Err(e) => {
      log_failure(&req, &invoice_id, &e);
      render_invoice_page(
        &templates,
        error_status(&e),
        InvoicePage {
          invoice_id,
          error: Some(e.to_string()),
          ..Default::default()
        },
      )
    }
  }
}

// POST /invoice/{invoice_id} - Submit fiscal data form
pub async fn fiscal_data_submit(
  req: HttpRequest,
  path: web::Path<String>,
  form: web::Form<FiscalDataForm>,
  templates: web::Data<TemplateEngine>,
  update_fiscal_data_use_case: web::Data<Arc<UpdateFiscalDataUseCase>>,
  get_invoice_details_use_case: web::Data<Arc<GetInvoiceDetailsUseCase>>,
) -> Result<HttpResponse, WebError> {
  let invoice_id = path.into_inner();
  let fiscal_data = FiscalData::from(form.into_inner());

  let updated = match update_fiscal_data_use_case
    .execute(UpdateFiscalDataCommand {
      invoice_id: invoice_id.clone(),
      fiscal_data: fiscal_data.clone(),
    })
    .await
  {
    Ok(updated) => updated,
    Err(e) => {
      log_failure(&req, &invoice_id, &e);
      return render_invoice_page(
        &templates,
        error_status(&e),
        InvoicePage {
          invoice_id,
          form: Some(fiscal_data),
          error: Some(e.to_string()),
          ..Default::default()
        },
      );
    }
  };

  // Show the invoice as the server now has it
  let page = match get_invoice_details_use_case
    .execute(GetInvoiceDetailsCommand {
      invoice_id: updated.invoice_id.clone(),
    })
    .await
  {
    Ok(details) => InvoicePage {
      invoice_id: updated.invoice_id,
      form: Some(form_from_details(&details)),
      details: Some(details),
      notice: Some(updated.message),
      error: None,
    },
    Err(e) => {
      log_failure(&req, &updated.invoice_id, &e);
      InvoicePage {
        invoice_id: updated.invoice_id,
        form: Some(fiscal_data),
        notice: Some(updated.message),
        error: Some(e.to_string()),
        ..Default::default()
      }
    }
  };

  render_invoice_page(&templates, StatusCode::OK, page)
}

// GET /invoice/{invoice_id}/pdf - Fetch the PDF with the API key and hand it to the browser
pub async fn invoice_pdf(
  req: HttpRequest,
  path: web::Path<String>,
  download_invoice_pdf_use_case: web::Data<Arc<DownloadInvoicePdfUseCase>>,
) -> Result<HttpResponse, WebError> {
  let invoice_id = path.into_inner();

  let response = download_invoice_pdf_use_case
    .execute(DownloadInvoicePdfCommand {
      invoice_id: invoice_id.clone(),
    })
    .await
    .inspect_err(|e| log_failure(&req, &invoice_id, e))?;

  Ok(
    HttpResponse::Ok()
      // Served from our origin, so never echo the upstream content type
      .content_type("application/pdf")
      .insert_header((
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{}\"", response.file_name),
      ))
      .body(response.pdf.bytes),
  )
}
