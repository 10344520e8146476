// core/src/model.rs

//! The `Employee` record and the shapes used to write one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
  pub id: i64,
  pub name: String,
  pub email: String,
  pub phone: Option<String>,
  pub created_at: DateTime<Utc>,
}

/// Request body for create and update, as received.
///
/// Every field is optional here so that a missing `name` or `email` surfaces as a
/// validation failure instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeePayload {
  pub name: Option<String>,
  pub email: Option<String>,
  pub phone: Option<String>,
}

/// The mutable columns of an employee, with `name` and `email` known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeFields {
  pub name: String,
  pub email: String,
  pub phone: Option<String>,
}

impl EmployeePayload {
  /// Returns `None` when `name` or `email` is absent or empty.
  pub fn into_fields(self) -> Option<EmployeeFields> {
    let name = self.name.filter(|n| !n.is_empty())?;
    let email = self.email.filter(|e| !e.is_empty())?;
    Some(EmployeeFields {
      name,
      email,
      phone: self.phone,
    })
  }
}
