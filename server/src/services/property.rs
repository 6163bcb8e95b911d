//! Property services - Ricerca paginata e dettaglio immobili

use crate::core::{AppError, AppState};
use crate::dtos::query::PROPERTY_ID_REQUIRED;
use crate::dtos::{
    PaginatedDTO, PropertyDetailDTO, PropertyIdParam, PropertySearchQuery, PropertySummaryDTO,
};
use crate::repositories::{PageRequest, PropertyFilter, PropertyStore, StoreError};
use axum::extract::{
    Json, Path, Query, State,
    rejection::{PathRejection, QueryRejection},
};
use futures::future;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

/// Conta e legge la pagina in parallelo, poi proietta i documenti nella summary.
///
/// Conteggio e pagina sono due letture indipendenti: fra le due può passare una
/// scrittura concorrente e `total_count` può non coincidere con gli elementi visti.
pub async fn search_properties(
    store: &dyn PropertyStore,
    filter: &PropertyFilter,
    page: PageRequest,
) -> Result<PaginatedDTO<PropertySummaryDTO>, StoreError> {
    let (total_count, documents) =
        future::try_join(store.count(filter), store.find_page(filter, page)).await?;

    debug!(
        "Matched {} properties, returning {} on page {}",
        total_count,
        documents.len(),
        page.page_number
    );

    Ok(PaginatedDTO::new(documents, total_count, page).map(PropertySummaryDTO::from))
}

/// Dettaglio di un singolo immobile, `StoreError::NotFound` se l'id non esiste
pub async fn property_detail(
    store: &dyn PropertyStore,
    id: &str,
) -> Result<PropertyDetailDTO, StoreError> {
    store
        .find_by_id(id)
        .await?
        .map(PropertyDetailDTO::from)
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
}

#[instrument(skip(state, query))]
pub async fn list_properties(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PropertySearchQuery>, QueryRejection>, // /properties?name=&pageSize=...
) -> Result<Json<PaginatedDTO<PropertySummaryDTO>>, AppError> {
    // 1. Query string non interpretabile (es. pageNumber=abc) -> 400
    let Query(query) = query?;
    debug!(?query, "Searching properties");

    // 2. Validazione completa prima di toccare lo store
    query.validate_all()?;

    // 3. Filtro + pagina, poi conteggio e lettura
    let (filter, page) = query.into_parts();
    let result = search_properties(state.store.as_ref(), &filter, page).await?;

    info!(
        "Found {} properties (page {}/{})",
        result.total_count, result.page_number, result.total_pages
    );
    Ok(Json(result))
}

#[instrument(skip(state, params))]
pub async fn get_property_by_id(
    State(state): State<Arc<AppState>>,
    params: Result<Path<PropertyIdParam>, PathRejection>, // parametro dalla URL /properties/{id}
) -> Result<Json<PropertyDetailDTO>, AppError> {
    // id non decodificabile (es. %FF) -> 400 con il corpo di errore standard
    let Path(params) = params?;
    debug!(property_id = %params.id, "Fetching property detail");

    if let Err(errors) = params.validate() {
        warn!("Blank property id");
        return Err(errors.into());
    }

    let detail = property_detail(state.store.as_ref(), &params.id).await?;
    info!("Property found");
    Ok(Json(detail))
}

/// `GET /api/properties/`: segmento id vuoto
pub async fn missing_property_id() -> AppError {
    warn!("Empty property id");
    AppError::validation(serde_json::json!({ "id": [PROPERTY_ID_REQUIRED] }))
}
