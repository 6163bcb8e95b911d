//! Caricamento iniziale dei documenti da file JSON
//!
//! Il file contiene un array di `Property` nel formato camelCase dell'API. Il seed
//! viene applicato solo se lo store è vuoto, così riavviare il server non duplica nulla.

use super::traits::{PropertyStore, StoreError};
use crate::entities::Property;
use std::path::Path;
use tracing::{info, instrument};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("cannot read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid seed file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Legge e deserializza il file di seed
pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<Property>, SeedError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Inserisce `documents` nell'ordine dato se lo store è vuoto
///
/// # Returns
/// Numero di documenti inseriti (0 se lo store conteneva già dati)
#[instrument(skip(store, documents), fields(documents = documents.len()))]
pub async fn seed_if_empty(
    store: &dyn PropertyStore,
    documents: &[Property],
) -> Result<usize, SeedError> {
    if !store.find_all().await?.is_empty() {
        info!("Store already populated, skipping seed");
        return Ok(0);
    }

    for property in documents {
        store.insert(property).await?;
    }

    info!("Seeded {} properties", documents.len());
    Ok(documents.len())
}
