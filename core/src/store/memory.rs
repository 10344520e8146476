// core/src/store/memory.rs

//! Process-local store with the same invariants as the SQL backends: ids only
//! ever increase, emails are unique, and nothing works after `close`.

use crate::error::{StoreError, StoreResult};
use crate::model::{Employee, EmployeeFields};
use crate::store::{Backend, EmployeeStore};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct MemoryState {
  last_id: i64,
  rows: BTreeMap<i64, Employee>,
  closed: bool,
}

impl MemoryState {
  fn ensure_open(&self) -> StoreResult<()> {
    if self.closed {
      return Err(StoreError::Closed);
    }
    Ok(())
  }

  fn email_taken(&self, email: &str, except_id: Option<i64>) -> bool {
    self
      .rows
      .values()
      .any(|row| row.email == email && Some(row.id) != except_id)
  }
}

/// Lock guards are never held across an `.await`; every method body is synchronous.
#[derive(Debug, Default)]
pub struct MemoryEmployeeStore {
  state: RwLock<MemoryState>,
}

impl MemoryEmployeeStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.state.read().rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
  fn backend(&self) -> Backend {
    Backend::Memory
  }

  async fn init_schema(&self) -> StoreResult<()> {
    self.state.read().ensure_open()
  }

  async fn ping(&self) -> StoreResult<()> {
    self.state.read().ensure_open()
  }

  async fn list(&self) -> StoreResult<Vec<Employee>> {
    let state = self.state.read();
    state.ensure_open()?;
    Ok(state.rows.values().rev().cloned().collect())
  }

  async fn get(&self, id: i64) -> StoreResult<Option<Employee>> {
    let state = self.state.read();
    state.ensure_open()?;
    Ok(state.rows.get(&id).cloned())
  }

  async fn create(&self, fields: &EmployeeFields) -> StoreResult<Employee> {
    let mut state = self.state.write();
    state.ensure_open()?;
    if state.email_taken(&fields.email, None) {
      return Err(StoreError::DuplicateEmail);
    }

    state.last_id += 1;
    let employee = Employee {
      id: state.last_id,
      name: fields.name.clone(),
      email: fields.email.clone(),
      phone: fields.phone.clone(),
      created_at: Utc::now(),
    };
    state.rows.insert(employee.id, employee.clone());
    Ok(employee)
  }

  async fn update(&self, id: i64, fields: &EmployeeFields) -> StoreResult<bool> {
    let mut state = self.state.write();
    state.ensure_open()?;
    if !state.rows.contains_key(&id) {
      return Ok(false);
    }
    if state.email_taken(&fields.email, Some(id)) {
      return Err(StoreError::DuplicateEmail);
    }

    if let Some(row) = state.rows.get_mut(&id) {
      row.name = fields.name.clone();
      row.email = fields.email.clone();
      row.phone = fields.phone.clone();
    }
    Ok(true)
  }

  async fn delete(&self, id: i64) -> StoreResult<bool> {
    let mut state = self.state.write();
    state.ensure_open()?;
    Ok(state.rows.remove(&id).is_some())
  }

  async fn close(&self) -> StoreResult<()> {
    let mut state = self.state.write();
    state.ensure_open()?;
    state.closed = true;
    Ok(())
  }
}
