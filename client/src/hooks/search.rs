//! Ricerca paginata che segue i filtri correnti

use super::{RequestState, RequestTracker};
use crate::api::PropertyService;
use crate::types::{FilterParams, PaginatedResponse, Property};
use std::sync::Arc;
use tokio::sync::watch;

pub struct PropertySearchHook {
    service: Arc<dyn PropertyService>,
    filters: FilterParams,
    tracker: RequestTracker<PaginatedResponse<Property>>,
}

impl PropertySearchHook {
    /// Crea l'hook e avvia subito la prima ricerca
    pub fn new(service: Arc<dyn PropertyService>, filters: FilterParams) -> Self {
        let hook = Self {
            service,
            filters,
            tracker: RequestTracker::new(),
        };
        hook.fetch();
        hook
    }

    /// Nuovi filtri: se diversi dai correnti annulla la ricerca in volo e ne avvia un'altra
    pub fn set_filters(&mut self, filters: FilterParams) {
        if filters == self.filters {
            return;
        }
        self.filters = filters;
        self.fetch();
    }

    /// Ripete la ricerca con gli stessi filtri
    pub fn refresh(&self) {
        self.fetch();
    }

    fn fetch(&self) {
        let service = Arc::clone(&self.service);
        let filters = self.filters.clone();
        self.tracker
            .issue(async move { service.get_properties(&filters).await });
    }

    pub fn filters(&self) -> &FilterParams {
        &self.filters
    }

    pub fn state(&self) -> RequestState<PaginatedResponse<Property>> {
        self.tracker.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState<PaginatedResponse<Property>>> {
        self.tracker.subscribe()
    }

    /// Richieste arrivate a conclusione (le annullate non contano)
    pub fn settled_count(&self) -> u64 {
        self.tracker.settled_count()
    }
}
