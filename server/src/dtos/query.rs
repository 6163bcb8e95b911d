//! Query DTOs - Data Transfer Objects per i parametri di ricerca
//!
//! Tutte le regole vengono valutate e riportate insieme: il client riceve l'elenco
//! completo dei campi non validi, non solo il primo.

use crate::repositories::{PageRequest, PropertyFilter};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

/// Dimensioni di pagina ammesse
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];
pub const DEFAULT_PAGE_NUMBER: i64 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PROPERTY_ID_REQUIRED: &str = "Property Id is required";

fn default_page_number() -> i64 {
    DEFAULT_PAGE_NUMBER
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn validate_page_number(page_number: i64) -> Result<(), ValidationError> {
    if page_number < 1 {
        Err(error_with_message(
            "range",
            "PageNumber must be greater than 0",
        ))
    } else if page_number > i64::from(u32::MAX) {
        Err(error_with_message(
            "range",
            "PageNumber must not exceed 4294967295",
        ))
    } else {
        Ok(())
    }
}

fn validate_page_size(page_size: u32) -> Result<(), ValidationError> {
    if PAGE_SIZE_OPTIONS.contains(&page_size) {
        Ok(())
    } else {
        Err(error_with_message(
            "page_size",
            "PageSize must be 10, 20, 50, or 100",
        ))
    }
}

fn validate_min_price(min_price: f64) -> Result<(), ValidationError> {
    if min_price > 0.0 {
        Ok(())
    } else {
        Err(error_with_message(
            "positive",
            "MinPrice must be greater than 0",
        ))
    }
}

fn validate_max_price(max_price: f64) -> Result<(), ValidationError> {
    if max_price > 0.0 {
        Ok(())
    } else {
        Err(error_with_message(
            "positive",
            "MaxPrice must be greater than 0",
        ))
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(error_with_message("required", PROPERTY_ID_REQUIRED))
    } else {
        Ok(())
    }
}

/// DTO per query parameters di ricerca immobili
/// `GET /api/properties?name=&address=&minPrice=&maxPrice=&pageNumber=&pageSize=`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PropertySearchQuery {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_min_price"))]
    pub min_price: Option<f64>,

    #[serde(default)]
    #[validate(custom(function = "validate_max_price"))]
    pub max_price: Option<f64>,

    #[serde(default = "default_page_number")]
    #[validate(custom(function = "validate_page_number"))]
    pub page_number: i64,

    #[serde(default = "default_page_size")]
    #[validate(custom(function = "validate_page_size"))]
    pub page_size: u32,
}

impl Default for PropertySearchQuery {
    fn default() -> Self {
        Self {
            name: None,
            address: None,
            min_price: None,
            max_price: None,
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PropertySearchQuery {
    /// Regole per campo (derive) + regola incrociata min/max.
    /// L'errore di ordinamento viene registrato sul campo `min_price`.
    pub fn validate_all(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min >= max {
                errors.add(
                    "min_price",
                    error_with_message("price_range", "MinPrice must be less than MaxPrice"),
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Separa i vincoli di ricerca dalla pagina richiesta. Da chiamare dopo `validate_all`,
    /// che garantisce `1 <= page_number <= u32::MAX`.
    pub fn into_parts(self) -> (PropertyFilter, PageRequest) {
        let page_number = u32::try_from(self.page_number.max(1)).unwrap_or(u32::MAX);
        let filter = PropertyFilter {
            name: self.name.filter(|n| !n.trim().is_empty()),
            address: self.address.filter(|a| !a.trim().is_empty()),
            min_price: self.min_price,
            max_price: self.max_price,
        };
        (filter, PageRequest::new(page_number, self.page_size))
    }
}

/// Parametro di path per `GET /api/properties/{id}`
#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct PropertyIdParam {
    #[validate(custom(function = "validate_not_blank"))]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_with_errors(errors: &ValidationErrors) -> Vec<String> {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, _)| field.to_string())
            .collect();
        fields.sort();
        fields
    }

    #[test]
    fn test_defaults_are_valid() {
        let query = PropertySearchQuery::default();
        assert!(query.validate_all().is_ok());
        assert_eq!(query.page_number, 1);
        assert_eq!(query.page_size, 10);
    }

    #[test]
    fn test_page_size_must_be_in_allowed_set() {
        let rejected = PropertySearchQuery {
            page_size: 15,
            ..Default::default()
        };
        let errors = rejected.validate_all().unwrap_err();
        assert_eq!(fields_with_errors(&errors), vec!["page_size"]);

        for size in PAGE_SIZE_OPTIONS {
            let accepted = PropertySearchQuery {
                page_size: size,
                ..Default::default()
            };
            assert!(accepted.validate_all().is_ok(), "pageSize={} deve essere accettato", size);
        }
    }

    #[test]
    fn test_page_number_must_be_positive() {
        for page_number in [0, -3] {
            let query = PropertySearchQuery {
                page_number,
                ..Default::default()
            };
            let errors = query.validate_all().unwrap_err();
            assert_eq!(fields_with_errors(&errors), vec!["page_number"]);
        }
    }

    #[test]
    fn test_page_number_beyond_u32_is_rejected() {
        let query = PropertySearchQuery {
            page_number: 99_999_999_999,
            ..Default::default()
        };
        let errors = query.validate_all().unwrap_err();
        assert_eq!(fields_with_errors(&errors), vec!["page_number"]);

        let largest = PropertySearchQuery {
            page_number: i64::from(u32::MAX),
            ..Default::default()
        };
        assert!(largest.validate_all().is_ok());
        assert_eq!(largest.into_parts().1.page_number, u32::MAX);
    }

    #[test]
    fn test_min_price_must_be_less_than_max_price() {
        let query = PropertySearchQuery {
            min_price: Some(600000.0),
            max_price: Some(500000.0),
            ..Default::default()
        };
        let errors = query.validate_all().unwrap_err();
        let field_errors = errors.field_errors();
        assert_eq!(field_errors.len(), 1);

        let (field, list) = field_errors.into_iter().next().unwrap();
        assert_eq!(field.to_string(), "min_price");
        assert_eq!(list[0].code, "price_range");
    }

    #[test]
    fn test_equal_prices_are_rejected() {
        let query = PropertySearchQuery {
            min_price: Some(500000.0),
            max_price: Some(500000.0),
            ..Default::default()
        };
        assert!(query.validate_all().is_err());
    }

    #[test]
    fn test_all_violations_are_reported_together() {
        let query = PropertySearchQuery {
            min_price: Some(-1.0),
            max_price: Some(-5.0),
            page_number: 0,
            page_size: 7,
            ..Default::default()
        };
        let errors = query.validate_all().unwrap_err();
        assert_eq!(
            fields_with_errors(&errors),
            vec!["max_price", "min_price", "page_number", "page_size"]
        );
        // min_price: sia "positive" che "price_range"
        assert_eq!(errors.field_errors()["min_price"].len(), 2);
    }

    #[test]
    fn test_into_parts_drops_blank_strings() {
        let query = PropertySearchQuery {
            name: Some("  ".to_string()),
            address: Some("Park".to_string()),
            min_price: Some(1.0),
            page_number: 3,
            page_size: 20,
            ..Default::default()
        };
        let (filter, page) = query.into_parts();
        assert_eq!(filter.name, None);
        assert_eq!(filter.address.as_deref(), Some("Park"));
        assert_eq!(filter.min_price, Some(1.0));
        assert_eq!(page, PageRequest::new(3, 20));
    }

    #[test]
    fn test_blank_id_is_rejected() {
        let blank = PropertyIdParam {
            id: "   ".to_string(),
        };
        assert!(blank.validate().is_err());

        let ok = PropertyIdParam {
            id: "prop-1".to_string(),
        };
        assert!(ok.validate().is_ok());
    }
}
