// core/src/store/postgres.rs

//! PostgreSQL backend.

use crate::error::StoreResult;
use crate::model::{Employee, EmployeeFields};
use crate::store::{Backend, EmployeeStore, StoreSettings};

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, instrument};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
  id BIGSERIAL PRIMARY KEY,
  name TEXT NOT NULL,
  email TEXT NOT NULL UNIQUE,
  phone TEXT,
  created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const SELECT_COLUMNS: &str = "SELECT id, name, email, phone, created_at FROM employees";

pub struct PgEmployeeStore {
  pool: PgPool,
}

impl PgEmployeeStore {
  fn pool_options(settings: &StoreSettings) -> PgPoolOptions {
    PgPoolOptions::new()
      .max_connections(settings.max_connections)
      .acquire_timeout(settings.acquire_timeout)
  }

  pub async fn connect(settings: &StoreSettings) -> StoreResult<Self> {
    let pool = Self::pool_options(settings).connect(&settings.database_url).await?;
    Ok(Self { pool })
  }

  pub fn connect_lazy(settings: &StoreSettings) -> StoreResult<Self> {
    let pool = Self::pool_options(settings).connect_lazy(&settings.database_url)?;
    Ok(Self { pool })
  }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
  fn backend(&self) -> Backend {
    Backend::Postgres
  }

  #[instrument(name = "postgres::init_schema", skip_all)]
  async fn init_schema(&self) -> StoreResult<()> {
    sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
    debug!("employees table ensured.");
    Ok(())
  }

  async fn ping(&self) -> StoreResult<()> {
    sqlx::query("SELECT 1").execute(&self.pool).await?;
    Ok(())
  }

  async fn list(&self) -> StoreResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(&format!("{SELECT_COLUMNS} ORDER BY id DESC"))
      .fetch_all(&self.pool)
      .await?;
    Ok(employees)
  }

  async fn get(&self, id: i64) -> StoreResult<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(&format!("{SELECT_COLUMNS} WHERE id = $1"))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(employee)
  }

  #[instrument(name = "postgres::create", skip_all, fields(email = %fields.email))]
  async fn create(&self, fields: &EmployeeFields) -> StoreResult<Employee> {
    let employee = sqlx::query_as::<_, Employee>(
      "INSERT INTO employees (name, email, phone) VALUES ($1, $2, $3) RETURNING id, name, email, phone, created_at",
    )
    .bind(&fields.name)
    .bind(&fields.email)
    .bind(fields.phone.as_deref())
    .fetch_one(&self.pool)
    .await?;
    debug!(id = employee.id, "Inserted employee row.");
    Ok(employee)
  }

  async fn update(&self, id: i64, fields: &EmployeeFields) -> StoreResult<bool> {
    let result = sqlx::query("UPDATE employees SET name = $1, email = $2, phone = $3 WHERE id = $4")
      .bind(&fields.name)
      .bind(&fields.email)
      .bind(fields.phone.as_deref())
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn delete(&self, id: i64) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM employees WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn close(&self) -> StoreResult<()> {
    self.pool.close().await;
    Ok(())
  }
}
