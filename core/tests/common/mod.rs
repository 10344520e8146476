// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use employee_directory::{EmployeeFields, EmployeeStore, MemoryEmployeeStore};
use std::sync::Arc;
use tracing::Level;

pub fn fields(name: &str, email: &str, phone: Option<&str>) -> EmployeeFields {
  EmployeeFields {
    name: name.to_string(),
    email: email.to_string(),
    phone: phone.map(str::to_string),
  }
}

pub fn memory_store() -> Arc<MemoryEmployeeStore> {
  Arc::new(MemoryEmployeeStore::new())
}

/// Creates each `(name, email)` in order and returns the assigned ids.
pub async fn seed(store: &dyn EmployeeStore, people: &[(&str, &str)]) -> Vec<i64> {
  let mut ids = Vec::with_capacity(people.len());
  for (name, email) in people {
    let created = store
      .create(&fields(name, email, None))
      .await
      .expect("seed insert should succeed");
    ids.push(created.id);
  }
  ids
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
