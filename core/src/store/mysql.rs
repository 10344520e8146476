// core/src/store/mysql.rs

//! MySQL / MariaDB backend.

use crate::error::{StoreError, StoreResult};
use crate::model::{Employee, EmployeeFields};
use crate::store::{Backend, EmployeeStore, StoreSettings};

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{debug, instrument};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
  id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
  name VARCHAR(255) NOT NULL,
  email VARCHAR(255) NOT NULL UNIQUE,
  phone VARCHAR(50) NULL,
  created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

const SELECT_COLUMNS: &str = "SELECT id, name, email, phone, created_at FROM employees";

pub struct MySqlEmployeeStore {
  pool: MySqlPool,
}

impl MySqlEmployeeStore {
  fn pool_options(settings: &StoreSettings) -> MySqlPoolOptions {
    MySqlPoolOptions::new()
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
impl EmployeeStore for MySqlEmployeeStore {
  fn backend(&self) -> Backend {
    Backend::MySql
  }

  #[instrument(name = "mysql::init_schema", skip_all)]
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
    let employee = sqlx::query_as::<_, Employee>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(employee)
  }

  // MySQL has no RETURNING: the column default stamps created_at, and the new row
  // is read back by its insert id.
  #[instrument(name = "mysql::create", skip_all, fields(email = %fields.email))]
  async fn create(&self, fields: &EmployeeFields) -> StoreResult<Employee> {
    let result = sqlx::query("INSERT INTO employees (name, email, phone) VALUES (?, ?, ?)")
      .bind(&fields.name)
      .bind(&fields.email)
      .bind(fields.phone.as_deref())
      .execute(&self.pool)
      .await?;

    let id = i64::try_from(result.last_insert_id())
      .map_err(|_| StoreError::Internal(format!("insert id {} out of range", result.last_insert_id())))?;
    debug!(id, "Inserted employee row.");

    let employee = sqlx::query_as::<_, Employee>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
      .bind(id)
      .fetch_one(&self.pool)
      .await?;
    Ok(employee)
  }

  // Rows are counted as matched, not changed (CLIENT_FOUND_ROWS), so an update that
  // rewrites identical values still reports the row as present.
  async fn update(&self, id: i64, fields: &EmployeeFields) -> StoreResult<bool> {
    let result = sqlx::query("UPDATE employees SET name = ?, email = ?, phone = ? WHERE id = ?")
      .bind(&fields.name)
      .bind(&fields.email)
      .bind(fields.phone.as_deref())
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn delete(&self, id: i64) -> StoreResult<bool> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
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
