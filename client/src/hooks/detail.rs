//! Dettaglio di un immobile selezionato

use super::{RequestState, RequestTracker};
use crate::api::PropertyService;
use crate::types::PropertyDetail;
use std::sync::Arc;
use tokio::sync::watch;

pub struct PropertyDetailHook {
    service: Arc<dyn PropertyService>,
    id: Option<String>,
    tracker: RequestTracker<PropertyDetail>,
}

impl PropertyDetailHook {
    /// Hook inattivo: nessuna richiesta finché non arriva un id
    pub fn new(service: Arc<dyn PropertyService>) -> Self {
        Self {
            service,
            id: None,
            tracker: RequestTracker::new(),
        }
    }

    /// Seleziona un immobile. Con id vuoto o assente non parte nessuna richiesta e lo
    /// stato torna a quello iniziale.
    pub fn set_id(&mut self, id: Option<String>) {
        let id = id.filter(|id| !id.trim().is_empty());
        if id == self.id {
            return;
        }
        self.id = id;

        match &self.id {
            Some(id) => {
                let service = Arc::clone(&self.service);
                let id = id.clone();
                self.tracker
                    .issue(async move { service.get_property_by_id(&id).await });
            }
            None => self.tracker.clear(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn state(&self) -> RequestState<PropertyDetail> {
        self.tracker.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState<PropertyDetail>> {
        self.tracker.subscribe()
    }
}
