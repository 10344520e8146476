// server/src/web/routes.rs

use actix_files::Files;
use actix_web::{web, HttpRequest};
use std::path::PathBuf;
use tracing::warn;

use crate::errors::AppError;
use crate::web::handlers::{employee_handlers, health_handlers};

pub const INVALID_JSON_BODY: &str = "Invalid JSON body";

/// Malformed or mistyped JSON bodies get the same `{"error": ...}` shape as every
/// other failure. The parser's detail is logged, not returned.
fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, req: &HttpRequest| {
    warn!(error = %err, path = %req.path(), "Rejected request body.");
    AppError::BadRequest(INVALID_JSON_BODY.to_string()).into()
  })
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .app_data(json_config())
      .route("/health", web::get().to(health_handlers::health_check_handler))
      .service(
        web::scope("/employees")
          .route("", web::get().to(employee_handlers::list_employees_handler))
          .route("", web::post().to(employee_handlers::create_employee_handler))
          .route("/{id}", web::get().to(employee_handlers::get_employee_handler))
          .route("/{id}", web::put().to(employee_handlers::update_employee_handler))
          .route("/{id}", web::delete().to(employee_handlers::delete_employee_handler)),
      ),
  );
}

/// Serves `static_dir` at `/` with `index.html` as the landing page. Register after
/// the API scope so it only sees paths nothing else claimed.
pub fn configure_static_files(static_dir: PathBuf) -> impl FnOnce(&mut web::ServiceConfig) {
  move |cfg: &mut web::ServiceConfig| {
    cfg.service(Files::new("/", static_dir).index_file("index.html"));
  }
}
