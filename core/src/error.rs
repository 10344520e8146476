// core/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
  /// The store rejected a write because another row already holds the email.
  /// `email` is the only unique column a caller can write.
  #[error("Email already exists")]
  DuplicateEmail,

  #[error("Database error: {0}")]
  Database(#[source] sqlx::Error),

  #[error("Unsupported database URL scheme: '{scheme}'")]
  UnsupportedBackend { scheme: String },

  #[error("Store has been closed")]
  Closed,

  #[error("Internal store error: {0}")]
  Internal(String),
}

impl StoreError {
  pub fn is_unique_violation(&self) -> bool {
    matches!(self, StoreError::DuplicateEmail)
  }
}

// Classification happens once, here, from the driver's structured error kind.
impl From<sqlx::Error> for StoreError {
  fn from(err: sqlx::Error) -> Self {
    if let Some(db_err) = err.as_database_error() {
      if db_err.is_unique_violation() {
        return StoreError::DuplicateEmail;
      }
    }
    if matches!(err, sqlx::Error::PoolClosed) {
      return StoreError::Closed;
    }
    StoreError::Database(err)
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
