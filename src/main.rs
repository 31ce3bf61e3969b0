use actix_web::{App, HttpServer, middleware::Logger};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use facturapid::{
  adapters::http::{
    RequestIdMiddleware, TemplateEngine, WebRouteDependencies, configure_web_routes,
    security_headers,
  },
  domain::invoice::InvoiceApiClient,
  infrastructure::{config::Config, http::ReqwestTransport},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Load configuration
  let config = Config::load().map_err(|e| {
    eprintln!("Failed to load configuration: {}", e);
    std::io::Error::new(
      std::io::ErrorKind::InvalidInput,
      format!("Failed to load configuration: {}", e),
    )
  })?;

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.filter.clone().into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Facturapid application");
  tracing::info!("Configuration loaded successfully");

  // Invoicing API client shared by every worker
  let transport = Arc::new(ReqwestTransport::new());
  let client = Arc::new(InvoiceApiClient::new(config.api.clone(), transport));
  tracing::info!("Calling invoicing API at {}", client.base_url());

  // Initialize template engine
  let templates = TemplateEngine::new().map_err(|e| {
    tracing::error!("Failed to initialize templates: {}", e);
    std::io::Error::other(format!("Template error: {}", e))
  })?;

  let deps = WebRouteDependencies::new(templates, client);

  let (server_host, server_port) = config.bind_address();
  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add security headers to every response
      .wrap(security_headers())
      // Add request ID middleware
      .wrap(RequestIdMiddleware::new())
      // Add logging middleware
      .wrap(Logger::default())
      // Configure web UI routes
      .configure(|cfg| configure_web_routes(cfg, deps.clone()))
  })
  .bind((server_host, server_port))?
  .run()
  .await
}
