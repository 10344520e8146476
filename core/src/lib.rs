// src/lib.rs

//! Storage layer for the employee directory service.
//!
//! The crate owns three things:
//!  - The `Employee` record and the validated `EmployeeFields` used to write one.
//!  - The `EmployeeStore` trait, the single seam every HTTP handler goes through.
//!  - Backend implementations: MySQL and PostgreSQL (via sqlx) plus an in-memory
//!    store with the same invariants, selected at startup from the database URL.

pub mod error;
pub mod model;
pub mod store;

// --- Store API ---

pub use crate::error::{StoreError, StoreResult};
pub use crate::model::{Employee, EmployeeFields, EmployeePayload};
pub use crate::store::{
  connect, connect_lazy, Backend, EmployeeStore, MemoryEmployeeStore, MySqlEmployeeStore, PgEmployeeStore,
  StoreSettings,
};
