//! Richieste osservabili
//!
//! Ogni hook tiene al massimo una richiesta in volo. Una nuova richiesta invalida il
//! token (numero di generazione) della precedente e ne interrompe il task; il task
//! ricontrolla il token sotto lo stesso lock prima di scrivere lo stato, quindi una
//! risposta superata non sovrascrive mai lo stato più recente.

pub mod detail;
pub mod search;

pub use detail::PropertyDetailHook;
pub use search::PropertySearchHook;

use crate::error::ApiError;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Stato visibile di una richiesta
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub loading: bool,
    /// Ultimo risultato arrivato con successo
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            data: None,
            error: None,
        }
    }
}

#[derive(Default)]
struct InFlight {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

struct Shared<T> {
    state: watch::Sender<RequestState<T>>,
    in_flight: Mutex<InFlight>,
    settled: AtomicU64,
}

impl<T> Shared<T> {
    fn lock(&self) -> MutexGuard<'_, InFlight> {
        // il lock protegge solo contatore e handle: nessun invariante da perdere
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Motore comune degli hook: emissione, cancellazione e commit delle richieste
pub(crate) struct RequestTracker<T> {
    shared: Arc<Shared<T>>,
}

impl<T> RequestTracker<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub(crate) fn new() -> Self {
        let (state, _) = watch::channel(RequestState::default());
        Self {
            shared: Arc::new(Shared {
                state,
                in_flight: Mutex::new(InFlight::default()),
                settled: AtomicU64::new(0),
            }),
        }
    }

    /// Avvia `request` al posto di quella eventualmente in volo.
    /// Va chiamata dentro un runtime tokio.
    pub(crate) fn issue<F>(&self, request: F)
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let mut in_flight = self.shared.lock();
        in_flight.generation += 1;
        let generation = in_flight.generation;

        if let Some(previous) = in_flight.task.take() {
            debug!("Cancelling request {}", generation - 1);
            previous.abort();
        }

        self.shared.state.send_modify(|state| state.loading = true);
        debug!("Issuing request {}", generation);

        let shared = Arc::clone(&self.shared);
        in_flight.task = Some(tokio::spawn(async move {
            let result = request.await;

            let mut in_flight = shared.lock();
            if in_flight.generation != generation {
                debug!("Discarding stale response {}", generation);
                return;
            }
            in_flight.task = None;

            shared.state.send_modify(|state| {
                state.loading = false;
                match result {
                    Ok(data) => {
                        state.data = Some(data);
                        state.error = None;
                    }
                    Err(error) => {
                        state.data = None;
                        state.error = Some(error);
                    }
                }
            });
            shared.settled.fetch_add(1, Ordering::SeqCst);
            debug!("Request {} settled", generation);
        }));
    }

    /// Annulla la richiesta in volo e torna allo stato iniziale
    pub(crate) fn clear(&self) {
        let mut in_flight = self.shared.lock();
        in_flight.generation += 1;
        if let Some(previous) = in_flight.task.take() {
            previous.abort();
        }
        self.shared
            .state
            .send_replace(RequestState::default());
    }

    pub(crate) fn state(&self) -> RequestState<T> {
        self.shared.state.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<RequestState<T>> {
        self.shared.state.subscribe()
    }

    pub(crate) fn settled_count(&self) -> u64 {
        self.shared.settled.load(Ordering::SeqCst)
    }
}

impl<T> Drop for RequestTracker<T> {
    fn drop(&mut self) {
        if let Some(task) = self.shared.lock().task.take() {
            task.abort();
        }
    }
}
