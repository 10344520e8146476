// server/src/state.rs
use crate::config::AppConfig;
use employee_directory::EmployeeStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn EmployeeStore>,
  pub config: Arc<AppConfig>,
}

impl AppState {
  pub fn new(store: Arc<dyn EmployeeStore>, config: Arc<AppConfig>) -> Self {
    Self { store, config }
  }
}
