use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Successful response body from the invoicing API.
///
/// JSON bodies are kept as an untyped document; the server owns the invoice
/// schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiPayload {
  Json(Value),
  Text(String),
}

impl ApiPayload {
  pub fn as_json(&self) -> Option<&Value> {
    match self {
      ApiPayload::Json(value) => Some(value),
      ApiPayload::Text(_) => None,
    }
  }

  /// Human-readable rendering: pretty-printed JSON or the raw text.
  pub fn to_display_string(&self) -> String {
    match self {
      ApiPayload::Json(value) => {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
      }
      ApiPayload::Text(text) => text.clone(),
    }
  }

  /// Looks up a string field on a JSON object payload.
  pub fn str_field(&self, field: &str) -> Option<&str> {
    self.as_json()?.get(field)?.as_str()
  }
}

/// PDF bytes as served by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfBlob {
  pub bytes: Vec<u8>,
  pub content_type: Option<String>,
}

impl PdfBlob {
  pub fn len(&self) -> usize {
    self.bytes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }

  /// Whether the upstream labelled the body as a PDF.
  pub fn is_pdf(&self) -> bool {
    self
      .content_type
      .as_deref()
      .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/pdf"))
  }
}

// Typed view of the server's invoice document. Only used for display; every
// field is lenient so unknown shapes fall back to the raw JSON view.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceHeader {
  pub codigo: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub serie: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tarifa: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fecha: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub hora: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub total: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cuota_iva: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub vendedor: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tipo_cobro: Option<String>,
  /// Client name
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cliente1: Option<String>,
  /// Client address
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cliente2: Option<String>,
  /// Client tax ID
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cliente3: Option<String>,
  /// Client email
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub cliente4: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
  #[serde(default)]
  pub linea: i64,
  #[serde(default)]
  pub producto: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub unidades: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub subtotal: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub iva_aplicado: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FullInvoice {
  pub header: InvoiceHeader,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub lines: Vec<InvoiceLine>,
}

// The server encodes an invoice without lines as `"lines": null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<InvoiceLine>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<Vec<InvoiceLine>>::deserialize(deserializer)?.unwrap_or_default())
}

impl FullInvoice {
  pub fn from_payload(payload: &ApiPayload) -> Option<Self> {
    serde_json::from_value(payload.as_json()?.clone()).ok()
  }
}
