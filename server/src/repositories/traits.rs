//! Common repository traits
//!
//! This module defines the interface every property store implements. Handlers only
//! ever see `dyn PropertyStore`, so the MySQL repository and the in-memory one are
//! interchangeable.

use super::filter::{PageRequest, PropertyFilter};
use crate::entities::Property;
use async_trait::async_trait;

/// Errors raised by a property store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No document with the given id (only raised by write operations)
    #[error("property {0} not found")]
    NotFound(String),

    #[error("property {0} already exists")]
    AlreadyExists(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Access to the property collection
///
/// Read operations return documents in stable insertion order. Every write touches a
/// single document and relies on the store's own atomicity.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Counts every document matching `filter`, ignoring pagination
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of matching documents
    /// * `Err(StoreError)` - Error during reading
    async fn count(&self, filter: &PropertyFilter) -> Result<u64, StoreError>;

    /// Reads one page of documents matching `filter`
    ///
    /// # Arguments
    /// * `filter` - Optional constraints (AND-combined)
    /// * `page` - Skips `page.offset()` documents and takes at most `page.limit()`
    ///
    /// # Returns
    /// * `Ok(Vec<Property>)` - Documents in insertion order (can be empty)
    /// * `Err(StoreError)` - Error during reading
    async fn find_page(
        &self,
        filter: &PropertyFilter,
        page: PageRequest,
    ) -> Result<Vec<Property>, StoreError>;

    /// Reads a document by its id
    ///
    /// # Returns
    /// * `Ok(Some(Property))` - Document found
    /// * `Ok(None)` - No document with that id
    /// * `Err(StoreError)` - Error during reading
    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, StoreError>;

    /// Reads every document in insertion order
    async fn find_all(&self) -> Result<Vec<Property>, StoreError>;

    /// Inserts a new document. `created_at` is taken from the document as-is.
    async fn insert(&self, property: &Property) -> Result<(), StoreError>;

    /// Replaces an existing document
    ///
    /// `updated_at` is set to the current time in the same write as the document.
    ///
    /// # Returns
    /// * `Ok(Property)` - Stored document, with the new `updated_at`
    /// * `Err(StoreError::NotFound)` - No document with that id
    async fn update(&self, property: &Property) -> Result<Property, StoreError>;

    /// Deletes a document
    ///
    /// # Returns
    /// * `Ok(true)` - Document deleted
    /// * `Ok(false)` - No document with that id
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
