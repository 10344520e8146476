// core/src/store/mod.rs

//! The `EmployeeStore` seam and backend selection.
//!
//! Each method maps to exactly one statement against the backing table. The
//! handle behind a store is created once at startup and shared by every request
//! through an `Arc<dyn EmployeeStore>`.

pub mod memory;
pub mod mysql;
pub mod postgres;

use crate::error::{StoreError, StoreResult};
use crate::model::{Employee, EmployeeFields};

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

pub use memory::MemoryEmployeeStore;
pub use mysql::MySqlEmployeeStore;
pub use postgres::PgEmployeeStore;

#[async_trait]
pub trait EmployeeStore: Send + Sync {
  fn backend(&self) -> Backend;

  /// Creates the `employees` table if it does not exist. Safe to run repeatedly.
  async fn init_schema(&self) -> StoreResult<()>;

  /// Round-trips a trivial statement to confirm the store is reachable.
  async fn ping(&self) -> StoreResult<()>;

  /// All employees, highest id first.
  async fn list(&self) -> StoreResult<Vec<Employee>>;

  async fn get(&self, id: i64) -> StoreResult<Option<Employee>>;

  /// Inserts a row and returns it with the store-assigned `id` and `created_at`.
  async fn create(&self, fields: &EmployeeFields) -> StoreResult<Employee>;

  /// Overwrites `name`, `email` and `phone`. Returns `false` when no row has `id`.
  async fn update(&self, id: i64, fields: &EmployeeFields) -> StoreResult<bool>;

  /// Hard delete. Returns `false` when no row has `id`.
  async fn delete(&self, id: i64) -> StoreResult<bool>;

  /// Releases the underlying handle. Later calls fail with `StoreError::Closed`.
  async fn close(&self) -> StoreResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
  MySql,
  Postgres,
  Memory,
}

impl Backend {
  /// Picks the backend from the scheme of a database URL.
  pub fn from_url(database_url: &str) -> StoreResult<Self> {
    let scheme = database_url
      .split_once(':')
      .map(|(scheme, _)| scheme)
      .unwrap_or(database_url);

    match scheme.to_ascii_lowercase().as_str() {
      "mysql" | "mariadb" => Ok(Backend::MySql),
      "postgres" | "postgresql" => Ok(Backend::Postgres),
      "memory" => Ok(Backend::Memory),
      other => Err(StoreError::UnsupportedBackend {
        scheme: other.to_string(),
      }),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Backend::MySql => "mysql",
      Backend::Postgres => "postgres",
      Backend::Memory => "memory",
    }
  }
}

impl fmt::Display for Backend {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
  pub database_url: String,
  pub max_connections: u32,
  pub acquire_timeout: Duration,
}

impl StoreSettings {
  pub fn new(database_url: impl Into<String>) -> Self {
    Self {
      database_url: database_url.into(),
      max_connections: 1,
      acquire_timeout: Duration::from_secs(5),
    }
  }
}

/// Opens a store and verifies the connection.
#[instrument(name = "store::connect", skip(settings), err(Display))]
pub async fn connect(settings: &StoreSettings) -> StoreResult<Arc<dyn EmployeeStore>> {
  let backend = Backend::from_url(&settings.database_url)?;
  let store: Arc<dyn EmployeeStore> = match backend {
    Backend::MySql => Arc::new(MySqlEmployeeStore::connect(settings).await?),
    Backend::Postgres => Arc::new(PgEmployeeStore::connect(settings).await?),
    Backend::Memory => Arc::new(MemoryEmployeeStore::new()),
  };
  info!(%backend, "Connected to employee store.");
  Ok(store)
}

/// Builds a store whose connections are opened on first use. Only a malformed URL
/// fails here; an unreachable server shows up later as per-request errors.
pub fn connect_lazy(settings: &StoreSettings) -> StoreResult<Arc<dyn EmployeeStore>> {
  let backend = Backend::from_url(&settings.database_url)?;
  let store: Arc<dyn EmployeeStore> = match backend {
    Backend::MySql => Arc::new(MySqlEmployeeStore::connect_lazy(settings)?),
    Backend::Postgres => Arc::new(PgEmployeeStore::connect_lazy(settings)?),
    Backend::Memory => Arc::new(MemoryEmployeeStore::new()),
  };
  warn!(%backend, "Employee store created without a verified connection.");
  Ok(store)
}
