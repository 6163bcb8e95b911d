//! Repositories module - Coordinatore per tutti gli store del progetto
//!
//! Ogni store implementa il trait `PropertyStore`; lo stato dell'applicazione tiene un
//! `Arc<dyn PropertyStore>`, quindi in produzione si usa MySQL e nei test lo store in memoria.

// ************************* NOTA SU SQLX ************************* //

/*
   Qui NON usiamo query! / query_as! (controllo statico a compile time contro il db).
   Il filtro di ricerca è dinamico: ogni campo opzionale aggiunge (o no) un pezzo di WHERE,
   quindi la query si costruisce con sqlx::QueryBuilder e push_bind, che resta parametrizzata
   e non concatena mai valori dell'utente nella stringa SQL.
   Le righe vengono mappate con #[derive(FromRow)] su una struct privata (PropertyRow) e poi
   convertite nell'entità: le colonne JSON (owner, traces, images) passano da sqlx::types::Json.
   Bonus: senza macro non serve un database attivo per compilare.
*/

// ************************* MODULI REPOSITORY ************************* //

pub mod filter;
pub mod memory;
pub mod property;
pub mod seed;
pub mod traits;

// Re-esportazione dei tipi per facilitare l'import
pub use filter::{PageRequest, PropertyFilter, PropertyPredicate};
pub use memory::InMemoryPropertyRepository;
pub use property::PropertyRepository;
pub use seed::{SeedError, load_seed_file, seed_if_empty};
pub use traits::{PropertyStore, StoreError};
