//! Errore restituito dalle chiamate API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// Stessa forma del corpo di errore del server; `details` per gli errori di validazione
/// è un oggetto `{campo: [messaggi]}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Nessuna risposta dal server
    pub fn network() -> Self {
        Self::new(NETWORK_ERROR, "Network error. Please check your connection.")
    }

    /// Risposta di errore senza un corpo interpretabile
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_ERROR, "An unexpected error occurred")
    }

    /// Messaggi di validazione per un campo (camelCase)
    pub fn field_messages(&self, field: &str) -> Vec<String> {
        self.details
            .as_ref()
            .and_then(|details| details.get(field))
            .and_then(Value::as_array)
            .map(|messages| {
                messages
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_validation_body() {
        let body = r#"{
            "code": "VALIDATION_ERROR",
            "message": "Validation failed",
            "details": { "pageSize": ["PageSize must be 10, 20, 50, or 100"] },
            "timestamp": "2025-01-01T10:00:00Z"
        }"#;
        let error: ApiError = serde_json::from_str(body).unwrap();

        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(
            error.field_messages("pageSize"),
            vec!["PageSize must be 10, 20, 50, or 100"]
        );
        assert!(error.field_messages("minPrice").is_empty());
        assert_eq!(error.to_string(), "VALIDATION_ERROR: Validation failed");
    }
}
