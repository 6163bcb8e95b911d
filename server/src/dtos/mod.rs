//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod pagination;
pub mod property;
pub mod query;

pub use pagination::PaginatedDTO;
pub use property::{ImageDTO, OwnerDTO, PropertyDetailDTO, PropertySummaryDTO, TraceDTO};
pub use query::{PAGE_SIZE_OPTIONS, PropertyIdParam, PropertySearchQuery};
