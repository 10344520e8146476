// server/src/web/handlers/employee_handlers.rs

use actix_web::{web, HttpResponse};
use employee_directory::{Employee, EmployeeFields, EmployeePayload};
use serde::Serialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::errors::{AppError, Result};
use crate::state::AppState;

const NOT_FOUND: &str = "Employee not found";

// --- Response DTOs ---
#[derive(Serialize, Debug)]
pub struct CreatedEmployeeResponse {
  #[serde(flatten)]
  pub employee: Employee,
  pub message: &'static str,
}

// --- Helpers ---

/// Ids are store-assigned integers, so anything else cannot name a row.
fn parse_employee_id(raw: &str) -> Result<i64> {
  raw.trim().parse::<i64>().map_err(|_| {
    warn!("Employee id '{}' is not an integer.", raw);
    AppError::NotFound(NOT_FOUND.to_string())
  })
}

fn required_fields(payload: EmployeePayload) -> Result<EmployeeFields> {
  payload
    .into_fields()
    .ok_or_else(|| AppError::Validation("Name and email are required".to_string()))
}

// --- Employee routes ---

#[instrument(name = "handler::list_employees", skip(app_state))]
pub async fn list_employees_handler(app_state: web::Data<AppState>) -> Result<HttpResponse> {
  let employees = app_state
    .store
    .list()
    .await
    .map_err(AppError::store("fetch employees"))?;

  info!("Fetched {} employees.", employees.len());
  Ok(HttpResponse::Ok().json(employees))
}

#[instrument(name = "handler::get_employee", skip(app_state, path), fields(employee_id = %path.as_str()))]
pub async fn get_employee_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
  let id = parse_employee_id(&path)?;

  match app_state.store.get(id).await.map_err(AppError::store("fetch employee"))? {
    Some(employee) => Ok(HttpResponse::Ok().json(employee)),
    None => {
      warn!("Employee {} not found.", id);
      Err(AppError::NotFound(NOT_FOUND.to_string()))
    }
  }
}

#[instrument(name = "handler::create_employee", skip(app_state, payload))]
pub async fn create_employee_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse> {
  let fields = required_fields(payload.into_inner())?;

  let employee = app_state
    .store
    .create(&fields)
    .await
    .map_err(AppError::store("create employee"))?;

  info!(employee_id = employee.id, "Employee created.");
  Ok(HttpResponse::Created().json(CreatedEmployeeResponse {
    employee,
    message: "Employee created successfully",
  }))
}

#[instrument(name = "handler::update_employee", skip(app_state, path, payload), fields(employee_id = %path.as_str()))]
pub async fn update_employee_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse> {
  let fields = required_fields(payload.into_inner())?;
  let id = parse_employee_id(&path)?;

  let updated = app_state
    .store
    .update(id, &fields)
    .await
    .map_err(AppError::store("update employee"))?;

  if !updated {
    warn!("Employee {} not found for update.", id);
    return Err(AppError::NotFound(NOT_FOUND.to_string()));
  }

  info!("Employee {} updated.", id);
  Ok(HttpResponse::Ok().json(json!({ "message": "Employee updated successfully" })))
}

#[instrument(name = "handler::delete_employee", skip(app_state, path), fields(employee_id = %path.as_str()))]
pub async fn delete_employee_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
  let id = parse_employee_id(&path)?;

  let deleted = app_state
    .store
    .delete(id)
    .await
    .map_err(AppError::store("delete employee"))?;

  if !deleted {
    warn!("Employee {} not found for delete.", id);
    return Err(AppError::NotFound(NOT_FOUND.to_string()));
  }

  info!("Employee {} deleted.", id);
  Ok(HttpResponse::Ok().json(json!({ "message": "Employee deleted successfully" })))
}
