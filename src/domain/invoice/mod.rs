pub mod entities;
pub mod errors;
pub mod ports;
pub mod responses;
pub mod services;
pub mod value_objects;

#[cfg(test)]
pub(crate) mod testing;

pub use entities::{ApiPayload, FullInvoice, InvoiceHeader, InvoiceLine, PdfBlob};
pub use errors::{ApiError, InvoiceError, TransportError};
pub use ports::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
pub use services::{API_KEY_HEADER, ClientConfig, InvoiceApiClient};
pub use value_objects::{FiscalData, InvoiceId, ValueObjectError};
