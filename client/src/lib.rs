//! Client library per l'API immobili
//!
//! - `api`: chiamate HTTP (`PropertyService`, implementato da `PropertyApi`)
//! - `filters`: stato dei filtri di ricerca
//! - `hooks`: richieste osservabili con cancellazione della precedente

pub mod api;
pub mod error;
pub mod filters;
pub mod hooks;
pub mod types;

pub use api::{PropertyApi, PropertyService};
pub use error::ApiError;
pub use filters::{FilterState, FilterUpdate};
pub use hooks::{PropertyDetailHook, PropertySearchHook, RequestState};
pub use types::{
    FilterParams, Owner, PaginatedResponse, Property, PropertyDetail, PropertyImage, PropertyTrace,
};
