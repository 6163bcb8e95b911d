//! Filtro di ricerca e richiesta di pagina
//!
//! Il filtro viene tradotto in una lista di predicati in AND. Ogni store li interpreta
//! a modo suo: il repository MySQL li traduce in SQL, quello in memoria li valuta
//! direttamente sul documento.

use crate::entities::Property;

/// Vincoli opzionali di ricerca. I campi assenti non contribuiscono alcun predicato.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub name: Option<String>,
    pub address: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Singolo predicato dello store
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyPredicate {
    /// Sottostringa case-insensitive sul nome
    NameContains(String),
    /// Sottostringa case-insensitive sulla via (solo `address.street`)
    StreetContains(String),
    /// `price >= bound`
    PriceAtLeast(f64),
    /// `price <= bound`
    PriceAtMost(f64),
}

impl PropertyPredicate {
    pub fn matches(&self, property: &Property) -> bool {
        match self {
            Self::NameContains(needle) => contains_ignore_case(&property.name, needle),
            Self::StreetContains(needle) => contains_ignore_case(&property.address.street, needle),
            Self::PriceAtLeast(bound) => property.price >= *bound,
            Self::PriceAtMost(bound) => property.price <= *bound,
        }
    }
}

impl PropertyFilter {
    /// Costruisce la lista di predicati. Lista vuota = match-all.
    pub fn predicates(&self) -> Vec<PropertyPredicate> {
        let mut predicates = Vec::new();

        if let Some(name) = non_blank(&self.name) {
            predicates.push(PropertyPredicate::NameContains(name.to_string()));
        }
        if let Some(street) = non_blank(&self.address) {
            predicates.push(PropertyPredicate::StreetContains(street.to_string()));
        }
        if let Some(min) = self.min_price {
            predicates.push(PropertyPredicate::PriceAtLeast(min));
        }
        if let Some(max) = self.max_price {
            predicates.push(PropertyPredicate::PriceAtMost(max));
        }

        predicates
    }

    /// Valuta il filtro completo su un documento
    pub fn matches(&self, property: &Property) -> bool {
        self.predicates().iter().all(|p| p.matches(property))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Pagina richiesta, già validata (page_number >= 1, page_size tra quelli ammessi)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Numero di documenti da saltare: `(page_number - 1) * page_size`
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number.saturating_sub(1)) * u64::from(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Address, Owner};
    use chrono::Utc;

    fn property(name: &str, street: &str, price: f64) -> Property {
        Property {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            address: Address {
                street: street.to_string(),
                city: "Manhattan".to_string(),
                country: "USA".to_string(),
                zip_code: "10001".to_string(),
            },
            price,
            property_type: "House".to_string(),
            main_image: "main.jpg".to_string(),
            images: vec![],
            description: "test".to_string(),
            bedrooms: 3,
            bathrooms: 2,
            area: 120.0,
            code_internal: "C-1".to_string(),
            year: 2020,
            owner: Owner {
                name: "Owner".to_string(),
                email: "owner@test.com".to_string(),
                phone: "555".to_string(),
                address: "Owner St".to_string(),
                photo: "owner.jpg".to_string(),
                birthday: Utc::now(),
            },
            traces: vec![],
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_filter_has_no_predicates() {
        let filter = PropertyFilter::default();
        assert!(filter.predicates().is_empty());
        assert!(filter.matches(&property("Anything", "Any St", 1.0)));
    }

    #[test]
    fn test_blank_strings_are_ignored() {
        let filter = PropertyFilter {
            name: Some("   ".to_string()),
            address: Some(String::new()),
            ..Default::default()
        };
        assert!(filter.predicates().is_empty());
    }

    #[test]
    fn test_name_is_case_insensitive_substring() {
        let filter = PropertyFilter {
            name: Some("luxURY".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&property("Luxury Penthouse", "5th Ave", 10.0)));
        assert!(filter.matches(&property("Super luxury villa", "5th Ave", 10.0)));
        assert!(!filter.matches(&property("Cozy Cabin", "Luxury Road", 10.0)));
    }

    #[test]
    fn test_address_matches_street_only() {
        let filter = PropertyFilter {
            address: Some("park".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&property("A", "742 Park Avenue", 10.0)));
        // la città non viene considerata
        let filter = PropertyFilter {
            address: Some("manhattan".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&property("A", "742 Park Avenue", 10.0)));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = PropertyFilter {
            min_price: Some(500_000.0),
            max_price: Some(1_000_000.0),
            ..Default::default()
        };
        assert!(filter.matches(&property("A", "S", 500_000.0)));
        assert!(filter.matches(&property("A", "S", 1_000_000.0)));
        assert!(!filter.matches(&property("A", "S", 499_999.99)));
        assert!(!filter.matches(&property("A", "S", 1_000_000.01)));
    }

    #[test]
    fn test_predicates_are_combined_in_order() {
        let filter = PropertyFilter {
            name: Some(" Luxury ".to_string()),
            address: Some("Park".to_string()),
            min_price: Some(1.0),
            max_price: Some(2.0),
        };
        assert_eq!(
            filter.predicates(),
            vec![
                PropertyPredicate::NameContains("Luxury".to_string()),
                PropertyPredicate::StreetContains("Park".to_string()),
                PropertyPredicate::PriceAtLeast(1.0),
                PropertyPredicate::PriceAtMost(2.0),
            ]
        );
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 20).offset(), 40);
        assert_eq!(PageRequest::new(2, 100).limit(), 100);
    }
}
