//! Application State - Stato globale dell'applicazione
//!
//! Contiene lo store degli immobili condiviso tra tutte le route.

use crate::repositories::{PropertyRepository, PropertyStore};
use sqlx::MySqlPool;
use std::sync::Arc;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Store degli immobili: MySQL in produzione, in memoria nei test
    pub store: Arc<dyn PropertyStore>,
}

impl AppState {
    /// Crea lo stato sopra un pool MySQL già aperto
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni MySQL condiviso
    pub fn new(pool: MySqlPool) -> Self {
        Self::with_store(Arc::new(PropertyRepository::new(pool)))
    }

    pub fn with_store(store: Arc<dyn PropertyStore>) -> Self {
        Self { store }
    }
}
