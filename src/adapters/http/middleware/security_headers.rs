use actix_web::middleware::DefaultHeaders;

/// Headers added to every response.
///
/// The invoice page carries a form that changes data on the API, so it must
/// not be framed, and downloads must not be sniffed into HTML.
pub fn security_headers() -> DefaultHeaders {
  DefaultHeaders::new()
    .add(("X-Content-Type-Options", "nosniff"))
    .add(("X-Frame-Options", "DENY"))
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{
    App, HttpResponse,
    test::{self, TestRequest},
    web,
  };

  #[actix_web::test]
  async fn test_sets_security_headers() {
    let app = test::init_service(
      App::new()
        .wrap(security_headers())
        .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;

    assert_eq!(resp.headers().get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(resp.headers().get("x-frame-options").unwrap(), "DENY");
  }
}
