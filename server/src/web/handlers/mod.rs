// server/src/web/handlers/mod.rs

pub mod employee_handlers;
pub mod health_handlers;
