// server/src/main.rs

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use employee_directory::{EmployeeStore, StoreSettings};
use employee_directory_server::telemetry::init_tracing;
use employee_directory_server::web::{configure_app_routes, configure_static_files};
use employee_directory_server::{AppConfig, AppState, LogFormat};
use std::process::ExitCode;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> ExitCode {
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => {
      init_tracing(cfg.log_format);
      Arc::new(cfg)
    }
    Err(e) => {
      init_tracing(LogFormat::Pretty);
      tracing::error!(error = %e, "Failed to load application configuration.");
      return ExitCode::FAILURE;
    }
  };

  tracing::info!("Starting employee directory server...");

  let store = match open_store(&app_config.store_settings()).await {
    Ok(store) => store,
    Err(e) => {
      tracing::error!(error = %e, "Could not create the employee store.");
      return ExitCode::FAILURE;
    }
  };

  if let Err(e) = store.init_schema().await {
    tracing::error!(error = %e, "Failed to ensure the employees table; continuing.");
  }

  let app_state = AppState::new(store.clone(), app_config.clone());
  let served = run_server(app_state).await;
  if let Err(e) = &served {
    tracing::error!(error = %e, "HTTP server stopped with an error.");
  }

  // Actix has already drained on SIGINT/SIGTERM by the time run() returns.
  tracing::info!("Shutting down; closing the employee store.");
  match store.close().await {
    Ok(()) if served.is_ok() => {
      tracing::info!("Employee store closed.");
      ExitCode::SUCCESS
    }
    Ok(()) => ExitCode::FAILURE,
    Err(e) => {
      tracing::error!(error = %e, "Failed to close the employee store.");
      ExitCode::FAILURE
    }
  }
}

/// Connects to the store; if it is unreachable the failure is logged and the
/// server keeps going with a lazily-connecting handle.
async fn open_store(settings: &StoreSettings) -> employee_directory::StoreResult<Arc<dyn EmployeeStore>> {
  match employee_directory::connect(settings).await {
    Ok(store) => Ok(store),
    Err(e) => {
      tracing::error!(error = %e, "Database connection failed; requests will fail until it recovers.");
      employee_directory::connect_lazy(settings)
    }
  }
}

async fn run_server(app_state: AppState) -> anyhow::Result<()> {
  let config = app_state.config.clone();
  let server_address = config.server_address();
  let static_dir = config.static_dir.clone();
  tracing::info!("Attempting to bind server to {}...", server_address);

  let server = HttpServer::new(move || {
    App::new()
      .app_data(web::Data::new(app_state.clone()))
      .wrap(Cors::permissive())
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
      .configure(configure_static_files(static_dir.clone()))
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?;

  tracing::info!("Server running at http://{}", server_address);
  tracing::info!("API endpoints:");
  tracing::info!("GET    /api/employees      - Get all employees");
  tracing::info!("GET    /api/employees/:id  - Get single employee");
  tracing::info!("POST   /api/employees      - Create new employee");
  tracing::info!("PUT    /api/employees/:id  - Update employee");
  tracing::info!("DELETE /api/employees/:id  - Delete employee");

  server.run().await.context("server terminated abnormally")
}
