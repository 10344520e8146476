// tests/sql_store_tests.rs
//
// Runs the store invariants against a real MySQL/MariaDB or PostgreSQL server named
// by TEST_DATABASE_URL. Without it the test logs and returns. Emails carry a
// per-run suffix so the test can share a database with existing rows.
mod common;
use common::*;
use employee_directory::{connect, Backend, EmployeeStore, StoreError, StoreSettings};
use std::sync::Arc;

fn run_suffix() -> String {
  let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
  format!("{}-{}", std::process::id(), nanos)
}

async fn sql_store() -> Option<Arc<dyn EmployeeStore>> {
  let url = match std::env::var("TEST_DATABASE_URL") {
    Ok(url) => url,
    Err(_) => {
      tracing::warn!("TEST_DATABASE_URL not set; skipping SQL store test.");
      return None;
    }
  };
  let store = connect(&StoreSettings::new(url)).await.expect("test database should be reachable");
  assert_ne!(store.backend(), Backend::Memory, "TEST_DATABASE_URL must name a SQL server");
  Some(store)
}

async fn check_schema_is_idempotent(store: &dyn EmployeeStore) {
  store.init_schema().await.unwrap();
  store.init_schema().await.unwrap();
  store.ping().await.unwrap();
}

async fn check_create_and_list_order(store: &dyn EmployeeStore, suffix: &str) -> Vec<i64> {
  let mut ids = Vec::new();
  for name in ["A", "B", "C"] {
    let email = format!("{}-{}@sql.test", name.to_lowercase(), suffix);
    let created = store.create(&fields(name, &email, Some("555-0100"))).await.unwrap();

    let fetched = store.get(created.id).await.unwrap().expect("created row should be readable");
    assert_eq!(fetched, created, "create must echo the stored row, created_at included");
    ids.push(created.id);
  }
  assert!(ids[0] < ids[1] && ids[1] < ids[2]);

  let listed: Vec<i64> = store
    .list()
    .await
    .unwrap()
    .into_iter()
    .map(|e| e.id)
    .filter(|id| ids.contains(id))
    .collect();
  assert_eq!(listed, vec![ids[2], ids[1], ids[0]]);
  ids
}

async fn check_duplicate_email_from_driver(store: &dyn EmployeeStore, ids: &[i64], suffix: &str) {
  let taken = format!("a-{}@sql.test", suffix);

  let err = store.create(&fields("Dup", &taken, None)).await.unwrap_err();
  assert!(matches!(err, StoreError::DuplicateEmail), "create got {:?}", err);

  let err = store.update(ids[1], &fields("B", &taken, None)).await.unwrap_err();
  assert!(matches!(err, StoreError::DuplicateEmail), "update got {:?}", err);
  assert_eq!(
    store.get(ids[1]).await.unwrap().unwrap().email,
    format!("b-{}@sql.test", suffix)
  );
}

async fn check_update_and_delete(store: &dyn EmployeeStore, ids: &[i64], suffix: &str) {
  let before = store.get(ids[0]).await.unwrap().unwrap();

  // Rewriting identical values still counts as finding the row.
  let same = fields(&before.name, &before.email, before.phone.as_deref());
  assert!(store.update(ids[0], &same).await.unwrap());

  let renamed = fields("A2", &format!("a2-{}@sql.test", suffix), None);
  assert!(store.update(ids[0], &renamed).await.unwrap());
  let after = store.get(ids[0]).await.unwrap().unwrap();
  assert_eq!(after.name, "A2");
  assert_eq!(after.phone, None);
  assert_eq!(after.created_at, before.created_at);

  assert!(store.delete(ids[2]).await.unwrap());
  assert!(store.get(ids[2]).await.unwrap().is_none());
  assert!(!store.delete(ids[2]).await.unwrap());
  assert!(!store.update(ids[2], &fields("C", "c-gone@sql.test", None)).await.unwrap());

  for id in ids.iter().take(2) {
    assert!(store.delete(*id).await.unwrap());
  }
}

#[tokio::test]
async fn test_sql_store_invariants() {
  setup_tracing();
  let Some(store) = sql_store().await else {
    return;
  };
  let suffix = run_suffix();

  check_schema_is_idempotent(store.as_ref()).await;
  let ids = check_create_and_list_order(store.as_ref(), &suffix).await;
  check_duplicate_email_from_driver(store.as_ref(), &ids, &suffix).await;
  check_update_and_delete(store.as_ref(), &ids, &suffix).await;

  store.close().await.unwrap();
  assert!(matches!(store.list().await, Err(StoreError::Closed)));
}
