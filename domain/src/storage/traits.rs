//! # Storage Traits
//!
//! The form talks to its backing store only through these traits, so the
//! REST client in the frontend and the in-memory store used by tests are
//! interchangeable.
//!
//! Futures are not required to be `Send`: the form runs on a single-threaded
//! event loop (the browser), where HTTP futures are `!Send`.

use std::rc::Rc;

use async_trait::async_trait;
use shared::{Category, FieldValues, Source};

use crate::errors::StoreError;

/// Read access to the reference collections used to fill the pick lists
#[async_trait(?Send)]
pub trait ReferenceStorage {
    /// Every row of the `source` collection
    async fn list_sources(&self) -> Result<Vec<Source>, StoreError>;

    /// Every row of the `category` collection
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
}

/// Write access to the `transaction` collection
#[async_trait(?Send)]
pub trait TransactionStorage {
    /// Insert one transaction record.
    /// The store is responsible for coercing the string fields.
    async fn insert_transaction(&self, record: &FieldValues) -> Result<(), StoreError>;
}

#[async_trait(?Send)]
impl<T: ReferenceStorage + ?Sized> ReferenceStorage for Rc<T> {
    async fn list_sources(&self) -> Result<Vec<Source>, StoreError> {
        (**self).list_sources().await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        (**self).list_categories().await
    }
}

#[async_trait(?Send)]
impl<T: TransactionStorage + ?Sized> TransactionStorage for Rc<T> {
    async fn insert_transaction(&self, record: &FieldValues) -> Result<(), StoreError> {
        (**self).insert_transaction(record).await
    }
}
