//! Tipi scambiati con il server (JSON camelCase)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_NUMBER: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

/// Parametri di ricerca lato client
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    pub name: String,
    pub address: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            min_price: None,
            max_price: None,
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterParams {
    /// Coppie della query string: stringhe vuote e prezzi assenti/zero vengono omessi,
    /// `pageNumber` e `pageSize` ci sono sempre
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(6);
        if !self.name.is_empty() {
            pairs.push(("name", self.name.clone()));
        }
        if !self.address.is_empty() {
            pairs.push(("address", self.address.clone()));
        }
        if let Some(min_price) = self.min_price.filter(|p| *p != 0.0) {
            pairs.push(("minPrice", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price.filter(|p| *p != 0.0) {
            pairs.push(("maxPrice", max_price.to_string()));
        }
        pairs.push(("pageNumber", self.page_number.to_string()));
        pairs.push(("pageSize", self.page_size.to_string()));
        pairs
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub photo: String,
    pub birthday: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyTrace {
    pub date_sale: DateTime<Utc>,
    pub name: String,
    pub value: f64,
    pub tax: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyImage {
    pub id: String,
    pub image_url: String,
    pub is_main_image: bool,
}

/// Elemento della lista
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: String,
    pub price: f64,
    pub property_type: String,
    pub main_image: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub code_internal: String,
    pub year: i32,
    pub owner: Owner,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetail {
    #[serde(flatten)]
    pub property: Property,
    pub description: String,
    pub traces: Vec<PropertyTrace>,
    pub images: Vec<PropertyImage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_only_has_paging() {
        let pairs = FilterParams::default().to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("pageNumber", "1".to_string()),
                ("pageSize", "10".to_string())
            ]
        );
    }

    #[test]
    fn test_zero_prices_are_omitted() {
        let filters = FilterParams {
            name: "Luxury".to_string(),
            min_price: Some(0.0),
            max_price: Some(500000.0),
            ..Default::default()
        };
        let pairs = filters.to_query_pairs();
        assert!(pairs.contains(&("name", "Luxury".to_string())));
        assert!(pairs.contains(&("maxPrice", "500000".to_string())));
        assert!(!pairs.iter().any(|(key, _)| *key == "minPrice"));
        assert!(!pairs.iter().any(|(key, _)| *key == "address"));
    }

    #[test]
    fn test_detail_deserializes_flat_json() {
        let json = serde_json::json!({
            "id": "p-1",
            "name": "Luxury Penthouse",
            "address": "742 Park Avenue, New York, USA 10021",
            "price": 750000.0,
            "propertyType": "Penthouse",
            "mainImage": "p.jpg",
            "bedrooms": 3,
            "bathrooms": 2,
            "area": 180.0,
            "codeInternal": "LUX-1",
            "year": 2018,
            "owner": {
                "name": "John Smith",
                "email": "john@example.com",
                "phone": "555-0100",
                "address": "1 Owner St",
                "photo": "john.jpg",
                "birthday": "1975-05-20T00:00:00Z"
            },
            "description": "Top floor",
            "traces": [],
            "images": [{ "id": "i-1", "imageUrl": "a.jpg", "isMainImage": true }],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": null
        });

        let detail: PropertyDetail = serde_json::from_value(json).unwrap();
        assert_eq!(detail.property.name, "Luxury Penthouse");
        assert_eq!(detail.images.len(), 1);
        assert!(detail.updated_at.is_none());
    }
}
