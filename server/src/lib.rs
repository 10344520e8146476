// server/src/lib.rs

//! HTTP surface of the employee directory: configuration, error mapping,
//! shared state and the actix-web routes.

pub mod config;
pub mod errors;
pub mod state;
pub mod telemetry;
pub mod web;

pub use crate::config::{AppConfig, LogFormat};
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
