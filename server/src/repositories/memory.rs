//! InMemoryPropertyRepository - Store in memoria per test e sviluppo locale
//!
//! Mantiene i documenti in un `Vec` protetto da `RwLock`: l'ordine del vettore è
//! l'ordine di inserimento.

use super::filter::{PageRequest, PropertyFilter};
use super::traits::{PropertyStore, StoreError};
use crate::entities::Property;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, instrument};

#[derive(Default)]
pub struct InMemoryPropertyRepository {
    documents: RwLock<Vec<Property>>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Crea lo store già popolato, nell'ordine dato
    pub fn with_documents(documents: Vec<Property>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<'_, Vec<Property>>, StoreError> {
        self.documents
            .read()
            .map_err(|e| StoreError::Unavailable(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<'_, Vec<Property>>, StoreError> {
        self.documents
            .write()
            .map_err(|e| StoreError::Unavailable(format!("Failed to acquire write lock: {}", e)))
    }
}

#[async_trait]
impl PropertyStore for InMemoryPropertyRepository {
    async fn count(&self, filter: &PropertyFilter) -> Result<u64, StoreError> {
        let documents = self.read_lock()?;
        Ok(documents.iter().filter(|p| filter.matches(p)).count() as u64)
    }

    #[instrument(skip(self, filter))]
    async fn find_page(
        &self,
        filter: &PropertyFilter,
        page: PageRequest,
    ) -> Result<Vec<Property>, StoreError> {
        let documents = self.read_lock()?;
        let predicates = filter.predicates();
        let items: Vec<Property> = documents
            .iter()
            .filter(|p| predicates.iter().all(|pred| pred.matches(p)))
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect();

        debug!("Retrieved {} properties from page {}", items.len(), page.page_number);
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, StoreError> {
        let documents = self.read_lock()?;
        Ok(documents.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Property>, StoreError> {
        Ok(self.read_lock()?.clone())
    }

    async fn insert(&self, property: &Property) -> Result<(), StoreError> {
        let mut documents = self.write_lock()?;
        if documents.iter().any(|p| p.id == property.id) {
            return Err(StoreError::AlreadyExists(property.id.clone()));
        }
        documents.push(property.clone());
        Ok(())
    }

    async fn update(&self, property: &Property) -> Result<Property, StoreError> {
        let mut documents = self.write_lock()?;
        let stored = documents
            .iter_mut()
            .find(|p| p.id == property.id)
            .ok_or_else(|| StoreError::NotFound(property.id.clone()))?;

        let created_at = stored.created_at;
        *stored = Property {
            created_at,
            updated_at: Some(Utc::now()),
            ..property.clone()
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut documents = self.write_lock()?;
        let before = documents.len();
        documents.retain(|p| p.id != id);
        Ok(documents.len() < before)
    }
}
