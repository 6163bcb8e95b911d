//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità che rappresentano i documenti persistiti nello store.

pub mod property;

// Re-exports per facilitare l'import
pub use property::{Address, Owner, Property, PropertyImage, PropertyTrace};
