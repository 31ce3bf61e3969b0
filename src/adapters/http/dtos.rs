use serde::{Deserialize, Serialize};

use crate::domain::invoice::FiscalData;

/// Fiscal data form posted from the invoice page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FiscalDataForm {
  #[serde(default)]
  pub cliente_nombre: Option<String>,
  #[serde(default)]
  pub cliente_direccion: Option<String>,
  #[serde(default)]
  pub cliente_nif: Option<String>,
  #[serde(default)]
  pub cliente_email: Option<String>,
}

impl From<FiscalDataForm> for FiscalData {
  fn from(form: FiscalDataForm) -> Self {
    FiscalData::from_form(
      form.cliente_nombre,
      form.cliente_direccion,
      form.cliente_nif,
      form.cliente_email,
    )
  }
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,
}
