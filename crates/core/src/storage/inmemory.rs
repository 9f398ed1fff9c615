//! In-memory table backend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::planning::TablePlan;

use super::{BackendError, CreateOutcome, Result, TableBackend};

/// In-memory storage backend for testing.
///
/// Behaves like the remote service for naming: a second create with the same
/// table name reports [`CreateOutcome::AlreadyExists`] and leaves the first
/// table untouched. Failures can be injected per table name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableBackend {
    tables: Arc<RwLock<Vec<TablePlan>>>,
    requests: Arc<RwLock<Vec<String>>>,
    failures: Arc<RwLock<HashMap<String, BackendError>>>,
}

impl InMemoryTableBackend {
    /// Creates a new backend with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every create request for `table_name` fail with `error`.
    pub async fn fail_on(&self, table_name: impl Into<String>, error: BackendError) {
        self.failures.write().await.insert(table_name.into(), error);
    }

    /// Tables that exist, in creation order.
    pub async fn tables(&self) -> Vec<TablePlan> {
        self.tables.read().await.clone()
    }

    /// Names of existing tables, in creation order.
    pub async fn table_names(&self) -> Vec<String> {
        self.tables
            .read()
            .await
            .iter()
            .map(|t| t.table_name.clone())
            .collect()
    }

    /// Every table name a create was requested for, including failed and
    /// duplicate requests, in request order.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl TableBackend for InMemoryTableBackend {
    async fn create_table(&self, plan: &TablePlan) -> Result<CreateOutcome> {
        self.requests.write().await.push(plan.table_name.clone());

        if let Some(error) = self.failures.read().await.get(&plan.table_name) {
            return Err(error.clone());
        }

        let mut tables = self.tables.write().await;
        if tables.iter().any(|t| t.table_name == plan.table_name) {
            return Ok(CreateOutcome::AlreadyExists);
        }
        tables.push(plan.clone());
        Ok(CreateOutcome::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::{TableSchema, Throughput};

    fn plan(name: &str, write: i64) -> TablePlan {
        TablePlan {
            table_name: name.to_string(),
            schema: TableSchema::bucketed(),
            throughput: Throughput { read: 20, write },
        }
    }

    #[tokio::test]
    async fn test_create_new_table() {
        let backend = InMemoryTableBackend::new();

        let outcome = backend.create_table(&plan("a_hourly", 20)).await.unwrap();

        assert_eq!(outcome, CreateOutcome::Created);
        assert_eq!(backend.tables().await, vec![plan("a_hourly", 20)]);
    }

    #[tokio::test]
    async fn test_duplicate_name_keeps_original_table() {
        let backend = InMemoryTableBackend::new();
        backend.create_table(&plan("a_hourly", 20)).await.unwrap();

        let outcome = backend.create_table(&plan("a_hourly", 80)).await.unwrap();

        assert_eq!(outcome, CreateOutcome::AlreadyExists);
        assert_eq!(backend.tables().await, vec![plan("a_hourly", 20)]);
        assert_eq!(backend.requests().await, vec!["a_hourly", "a_hourly"]);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let backend = InMemoryTableBackend::new();
        let error = BackendError::PermissionDenied("not authorized".to_string());
        backend.fail_on("a_hourly", error.clone()).await;

        let result = backend.create_table(&plan("a_hourly", 20)).await;

        assert_eq!(result, Err(error));
        assert!(backend.table_names().await.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let backend = InMemoryTableBackend::new();
        let clone = backend.clone();

        clone.create_table(&plan("a_hourly", 20)).await.unwrap();

        assert_eq!(backend.table_names().await, vec!["a_hourly"]);
    }
}
