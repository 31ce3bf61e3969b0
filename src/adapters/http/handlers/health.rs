use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::application::invoice::{CheckApiHealthUseCase, HealthStatus};

// GET /health - front end liveness plus invoicing API reachability
pub async fn health_check(use_case: web::Data<Arc<CheckApiHealthUseCase>>) -> HttpResponse {
  let response = use_case.execute().await;

  match response.status {
    HealthStatus::Up => HttpResponse::Ok().json(response),
    HealthStatus::Down => HttpResponse::ServiceUnavailable().json(response),
  }
}
