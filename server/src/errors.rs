// server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use employee_directory::StoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Malformed Request: {0}")]
  BadRequest(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  /// A store call failed while trying to `action` (e.g. "fetch employees").
  /// The client sees "Failed to {action}" unless the cause is a duplicate email.
  #[error("Store Error while trying to {action}: {source}")]
  Store {
    action: &'static str,
    #[source]
    source: StoreError,
  },
}

impl AppError {
  /// Adapter for `map_err` on store calls.
  pub fn store(action: &'static str) -> impl FnOnce(StoreError) -> AppError {
    move |source| AppError::Store { action, source }
  }

  fn client_message(&self) -> String {
    match self {
      AppError::Validation(m) | AppError::BadRequest(m) | AppError::NotFound(m) => m.clone(),
      AppError::Store { source, .. } if source.is_unique_violation() => "Email already exists".to_string(),
      AppError::Store { action, .. } => format!("Failed to {}", action),
      AppError::Config(_) => "Configuration issue".to_string(),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Store { source, .. } if source.is_unique_violation() => StatusCode::BAD_REQUEST,
      AppError::Store { .. } | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    // Full detail stays in the log; the body only carries the client message.
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, "Responding with error");
    }
    HttpResponse::build(status).json(json!({ "error": self.client_message() }))
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::body::to_bytes;

  async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
    let resp = err.error_response();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body()).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  #[actix_web::test]
  async fn duplicate_email_is_a_bad_request() {
    let (status, body) = body_of(AppError::store("create employee")(StoreError::DuplicateEmail)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Email already exists" }));
  }

  #[actix_web::test]
  async fn other_store_failures_hide_detail() {
    let (status, body) = body_of(AppError::store("fetch employees")(StoreError::Internal(
      "connection reset by peer".to_string(),
    )))
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch employees" }));
  }

  #[actix_web::test]
  async fn not_found_and_validation_pass_their_message_through() {
    let (status, body) = body_of(AppError::NotFound("Employee not found".to_string())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Employee not found");

    let (status, body) = body_of(AppError::Validation("Name and email are required".to_string())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Name and email are required");
  }
}
