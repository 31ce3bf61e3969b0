pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod templates;

// Re-export commonly used types
pub use dtos::{ErrorResponse, FiscalDataForm};
pub use errors::WebError;
pub use middleware::{RequestId, RequestIdExt, RequestIdMiddleware, security_headers};
pub use routes::{WebRouteDependencies, configure_web_routes};
pub use templates::TemplateEngine;
