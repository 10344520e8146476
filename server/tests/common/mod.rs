// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use employee_directory::MemoryEmployeeStore;
use employee_directory_server::config::default_static_dir;
use employee_directory_server::{AppConfig, AppState};
use std::path::Path;
use std::sync::Arc;
use tracing::Level;

pub fn test_config(static_dir: &Path) -> Arc<AppConfig> {
  let static_dir = static_dir.to_string_lossy().into_owned();
  let config = AppConfig::from_lookup(|name| match name {
    "DATABASE_URL" => Some("memory://".to_string()),
    "STATIC_DIR" => Some(static_dir.clone()),
    _ => None,
  })
  .expect("test config should load");
  Arc::new(config)
}

/// A fresh in-memory store plus state wired to it. The returned store handle lets
/// tests inspect rows directly.
pub fn memory_state() -> (Arc<MemoryEmployeeStore>, AppState) {
  let store = Arc::new(MemoryEmployeeStore::new());
  let state = AppState::new(store.clone(), test_config(&default_static_dir()));
  (store, state)
}

/// Builds the same App as `main` around `$state` and initializes it as a test service.
macro_rules! test_app {
  ($state:expr) => {
    test_app!($state, employee_directory_server::config::default_static_dir())
  };
  ($state:expr, $static_dir:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .wrap(actix_cors::Cors::permissive())
        .wrap(tracing_actix_web::TracingLogger::default())
        .configure(employee_directory_server::web::configure_app_routes)
        .configure(employee_directory_server::web::configure_static_files($static_dir)),
    )
    .await
  };
}

// Test output goes through the capture-aware writer; first caller wins.
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
