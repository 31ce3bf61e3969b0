use actix_web::{HttpRequest, HttpResponse, http::StatusCode, web};

use crate::adapters::http::{errors::WebError, templates::TemplateEngine};

/// Render the welcome page
pub async fn home_page(templates: web::Data<TemplateEngine>) -> Result<HttpResponse, WebError> {
  let mut context = tera::Context::new();
  context.insert("title", "Home");

  let html = templates.render("pages/home.html.tera", &context)?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Catch-all for unknown paths
pub async fn not_found_page(
  req: HttpRequest,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, WebError> {
  tracing::debug!("No route for {} {}", req.method(), req.path());

  let mut context = tera::Context::new();
  context.insert("title", "Page Not Found");

  let html = templates.render("pages/not_found.html.tera", &context)?;

  Ok(
    HttpResponse::build(StatusCode::NOT_FOUND)
      .content_type("text/html")
      .body(html),
  )
}
