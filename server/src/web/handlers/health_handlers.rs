// server/src/web/handlers/health_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{instrument, warn};

use crate::state::AppState;

/// 200 when the store answers a trivial statement, 503 otherwise.
#[instrument(name = "handler::health", skip(app_state))]
pub async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  let backend = app_state.store.backend();
  match app_state.store.ping().await {
    Ok(()) => HttpResponse::Ok().json(json!({ "status": "ok", "backend": backend.as_str() })),
    Err(e) => {
      warn!(error = %e, %backend, "Health check could not reach the store.");
      HttpResponse::ServiceUnavailable().json(json!({ "status": "unavailable", "backend": backend.as_str() }))
    }
  }
}
