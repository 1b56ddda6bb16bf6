//! In-process store.
//!
//! Holds the reference rows in memory and records every inserted transaction.
//! Failures can be injected per collection to exercise the error paths.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use shared::{Category, FieldValues, Source, Table};
use tracing::debug;

use super::traits::{ReferenceStorage, TransactionStorage};
use crate::errors::StoreError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    sources: Vec<Source>,
    categories: Vec<Category>,
    transactions: RefCell<Vec<FieldValues>>,
    failures: HashMap<Table, StoreError>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    /// Make every request against `table` fail with `error`
    pub fn failing(mut self, table: Table, error: StoreError) -> Self {
        self.failures.insert(table, error);
        self
    }

    /// Stop failing requests against `table`
    pub fn recover(&mut self, table: Table) {
        self.failures.remove(&table);
    }

    /// Transactions inserted so far, oldest first
    pub fn transactions(&self) -> Vec<FieldValues> {
        self.transactions.borrow().clone()
    }

    fn check(&self, table: Table) -> Result<(), StoreError> {
        match self.failures.get(&table) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl ReferenceStorage for MemoryStore {
    async fn list_sources(&self) -> Result<Vec<Source>, StoreError> {
        self.check(Table::Source)?;
        Ok(self.sources.clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        self.check(Table::Category)?;
        Ok(self.categories.clone())
    }
}

#[async_trait(?Send)]
impl TransactionStorage for MemoryStore {
    async fn insert_transaction(&self, record: &FieldValues) -> Result<(), StoreError> {
        self.check(Table::Transaction)?;
        let mut transactions = self.transactions.borrow_mut();
        transactions.push(record.clone());
        debug!("stored transaction #{} in memory", transactions.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chase() -> Source {
        Source {
            id: "s1".to_string(),
            source_type: "bank".to_string(),
            name: "Chase".to_string(),
        }
    }

    #[tokio::test]
    async fn test_lists_configured_rows() {
        let store = MemoryStore::new().with_sources(vec![chase()]);

        assert_eq!(store.list_sources().await.unwrap(), vec![chase()]);
        assert!(store.list_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_scoped_to_one_table() {
        let store = MemoryStore::new()
            .with_sources(vec![chase()])
            .failing(Table::Category, StoreError::rejected("permission denied"));

        assert!(store.list_sources().await.is_ok());
        assert_eq!(
            store.list_categories().await,
            Err(StoreError::rejected("permission denied"))
        );
    }

    #[tokio::test]
    async fn test_rejected_insert_is_not_recorded() {
        let mut store = MemoryStore::new()
            .failing(Table::Transaction, StoreError::rejected("constraint violation"));
        let record = FieldValues {
            amount: "12".to_string(),
            ..FieldValues::default()
        };

        assert!(store.insert_transaction(&record).await.is_err());
        assert!(store.transactions().is_empty());

        store.recover(Table::Transaction);
        store.insert_transaction(&record).await.unwrap();
        assert_eq!(store.transactions(), vec![record]);
    }
}
