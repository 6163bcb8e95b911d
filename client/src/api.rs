//! Accesso HTTP all'API immobili

use crate::error::ApiError;
use crate::types::{FilterParams, PaginatedResponse, Property, PropertyDetail};
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::env;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Operazioni remote usate dagli hook; i test le sostituiscono con un fake
#[async_trait]
pub trait PropertyService: Send + Sync {
    async fn get_properties(
        &self,
        filters: &FilterParams,
    ) -> Result<PaginatedResponse<Property>, ApiError>;

    async fn get_property_by_id(&self, id: &str) -> Result<PropertyDetail, ApiError>;
}

pub struct PropertyApi {
    client: Client,
    base_url: Url,
}

impl PropertyApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::new("ERROR", format!("Invalid API base URL: {}", e)))?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::new("ERROR", format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Legge `API_BASE_URL`, altrimenti usa `http://localhost:5000/api`
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url =
            env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::new(&base_url)
    }

    /// `{base}/properties[/{segment}]`, con il segmento codificato
    fn endpoint(&self, segment: Option<&str>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::new("ERROR", "API base URL cannot have a path"))?;
            segments.pop_if_empty().push("properties");
            if let Some(segment) = segment {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!("No response from API: {}", e);
            ApiError::network()
        })?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        response.json::<T>().await.map_err(|e| {
            warn!("Unreadable API response: {}", e);
            ApiError::unknown()
        })
    }
}

/// Corpo di errore del server, oppure `UNKNOWN_ERROR` se non interpretabile
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    match response.bytes().await {
        Ok(body) => parse_error_body(&body).unwrap_or_else(|| {
            warn!("API returned {} without an error body", status);
            ApiError::unknown()
        }),
        Err(_) => ApiError::network(),
    }
}

fn parse_error_body(body: &[u8]) -> Option<ApiError> {
    serde_json::from_slice(body).ok()
}

#[async_trait]
impl PropertyService for PropertyApi {
    async fn get_properties(
        &self,
        filters: &FilterParams,
    ) -> Result<PaginatedResponse<Property>, ApiError> {
        let url = self.endpoint(None)?;
        debug!("Fetching properties from {} with {:?}", url, filters);
        let request = self.client.get(url).query(&filters.to_query_pairs());
        self.send(request).await
    }

    async fn get_property_by_id(&self, id: &str) -> Result<PropertyDetail, ApiError> {
        let url = self.endpoint(Some(id))?;
        debug!("Fetching property detail from {}", url);
        self.send(self.client.get(url)).await
    }
}
