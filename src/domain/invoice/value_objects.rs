use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueObjectError {
  #[error("Invalid invoice ID: {0}")]
  InvalidInvoiceId(String),
  #[error("Invalid fiscal data: {0}")]
  InvalidFiscalData(String),
}

// Invoice ID - string or numeric key owned by the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InvoiceId(String);

impl InvoiceId {
  pub fn new(value: impl Into<String>) -> Result<Self, ValueObjectError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
      return Err(ValueObjectError::InvalidInvoiceId(
        "Invoice ID cannot be empty".to_string(),
      ));
    }
    if trimmed.len() > 64 {
      return Err(ValueObjectError::InvalidInvoiceId(
        "Invoice ID cannot exceed 64 characters".to_string(),
      ));
    }
    // Placed verbatim into a URL path segment
    if !trimmed
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
      return Err(ValueObjectError::InvalidInvoiceId(format!(
        "'{}' contains characters other than letters, digits, '-' or '_'",
        trimmed
      )));
    }
    Ok(Self(trimmed.to_string()))
  }

  pub fn value(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for InvoiceId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl TryFrom<String> for InvoiceId {
  type Error = ValueObjectError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl From<u64> for InvoiceId {
  fn from(value: u64) -> Self {
    Self(value.to_string())
  }
}

impl From<InvoiceId> for String {
  fn from(id: InvoiceId) -> Self {
    id.0
  }
}

/// Customer fiscal fields accepted by `PUT /invoices/{id}`.
///
/// The server stores each field in a `VARCHAR(30)` column, hence the limits.
/// Absent fields are omitted from the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct FiscalData {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  #[validate(length(max = 30, message = "Client name cannot exceed 30 characters"))]
  pub cliente_nombre: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  #[validate(length(max = 30, message = "Client address cannot exceed 30 characters"))]
  pub cliente_direccion: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  #[validate(length(max = 30, message = "Client tax ID cannot exceed 30 characters"))]
  pub cliente_nif: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  #[validate(
    email(message = "Invalid email format"),
    length(max = 30, message = "Client email cannot exceed 30 characters")
  )]
  pub cliente_email: Option<String>,
}

impl FiscalData {
  /// Builds fiscal data from raw form input, treating blank fields as absent.
  pub fn from_form(
    cliente_nombre: Option<String>,
    cliente_direccion: Option<String>,
    cliente_nif: Option<String>,
    cliente_email: Option<String>,
  ) -> Self {
    fn clean(value: Option<String>) -> Option<String> {
      value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
    }

    Self {
      cliente_nombre: clean(cliente_nombre),
      cliente_direccion: clean(cliente_direccion),
      cliente_nif: clean(cliente_nif),
      cliente_email: clean(cliente_email),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.cliente_nombre.is_none()
      && self.cliente_direccion.is_none()
      && self.cliente_nif.is_none()
      && self.cliente_email.is_none()
  }

  /// Runs field validation and requires at least one field to be present.
  pub fn validated(self) -> Result<Self, ValueObjectError> {
    if self.is_empty() {
      return Err(ValueObjectError::InvalidFiscalData(
        "At least one fiscal data field must be provided for update".to_string(),
      ));
    }

    self.validate().map_err(|errors| {
      let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
          errs.iter().map(move |e| match &e.message {
            Some(message) => message.to_string(),
            None => format!("{} is invalid", field),
          })
        })
        .collect();
      messages.sort();
      ValueObjectError::InvalidFiscalData(messages.join("; "))
    })?;

    Ok(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_invoice_id_trims_whitespace() {
    let id = InvoiceId::new("  123 ").unwrap();
    assert_eq!(id.value(), "123");
  }

  #[test]
  fn test_invoice_id_from_number() {
    assert_eq!(InvoiceId::from(42u64).value(), "42");
  }

  #[test]
  fn test_invoice_id_rejects_empty() {
    assert!(matches!(
      InvoiceId::new("   "),
      Err(ValueObjectError::InvalidInvoiceId(_))
    ));
  }

  #[test]
  fn test_invoice_id_rejects_path_characters() {
    assert!(InvoiceId::new("12/../admin").is_err());
    assert!(InvoiceId::new("12?x=1").is_err());
    assert!(InvoiceId::new("INV-2024_01").is_ok());
  }

  #[test]
  fn test_fiscal_data_from_form_drops_blank_fields() {
    let data = FiscalData::from_form(
      Some("  Acme  ".to_string()),
      Some("".to_string()),
      None,
      Some("   ".to_string()),
    );

    assert_eq!(data.cliente_nombre.as_deref(), Some("Acme"));
    assert!(data.cliente_direccion.is_none());
    assert!(data.cliente_email.is_none());
  }

  #[test]
  fn test_fiscal_data_requires_one_field() {
    let result = FiscalData::default().validated();
    assert!(matches!(
      result,
      Err(ValueObjectError::InvalidFiscalData(msg)) if msg.contains("At least one")
    ));
  }

  #[test]
  fn test_fiscal_data_rejects_long_name() {
    let data = FiscalData {
      cliente_nombre: Some("x".repeat(31)),
      ..Default::default()
    };

    let err = data.validated().unwrap_err();
    assert!(err.to_string().contains("cannot exceed 30 characters"));
  }

  #[test]
  fn test_fiscal_data_rejects_invalid_email() {
    let data = FiscalData {
      cliente_email: Some("not-an-email".to_string()),
      ..Default::default()
    };

    let err = data.validated().unwrap_err();
    assert!(err.to_string().contains("Invalid email format"));
  }

  #[test]
  fn test_fiscal_data_serializes_only_present_fields() {
    let data = FiscalData {
      cliente_nombre: Some("Acme".to_string()),
      ..Default::default()
    };

    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json, serde_json::json!({ "cliente_nombre": "Acme" }));
  }
}
