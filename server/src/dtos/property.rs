//! Property DTOs - Proiezioni esposte dall'API
//!
//! La lista restituisce la proiezione ridotta (`PropertySummaryDTO`), il dettaglio la
//! proiezione completa. Entrambe appiattiscono l'indirizzo in una singola stringa.

use crate::entities::{Owner, Property, PropertyImage, PropertyTrace};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDTO {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub photo: String,
    pub birthday: DateTime<Utc>,
}

impl From<Owner> for OwnerDTO {
    fn from(value: Owner) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            address: value.address,
            photo: value.photo,
            birthday: value.birthday,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TraceDTO {
    pub date_sale: DateTime<Utc>,
    pub name: String,
    pub value: f64,
    pub tax: f64,
}

impl From<PropertyTrace> for TraceDTO {
    fn from(value: PropertyTrace) -> Self {
        Self {
            date_sale: value.date_sale,
            name: value.name,
            value: value.value,
            tax: value.tax,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageDTO {
    pub id: String,
    pub image_url: String,
    pub is_main_image: bool,
}

impl From<PropertyImage> for ImageDTO {
    fn from(value: PropertyImage) -> Self {
        Self {
            id: value.id,
            image_url: value.image_url,
            is_main_image: value.is_main_image,
        }
    }
}

/// Elemento della lista paginata
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummaryDTO {
    pub id: String,
    pub name: String,
    pub address: String, // "{street}, {city}, {country} {zipCode}"
    pub price: f64,
    pub property_type: String,
    pub main_image: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub code_internal: String,
    pub year: i32,
    pub owner: OwnerDTO,
}

impl From<Property> for PropertySummaryDTO {
    fn from(value: Property) -> Self {
        Self {
            address: value.address.to_string(),
            id: value.id,
            name: value.name,
            price: value.price,
            property_type: value.property_type,
            main_image: value.main_image,
            bedrooms: value.bedrooms,
            bathrooms: value.bathrooms,
            area: value.area,
            code_internal: value.code_internal,
            year: value.year,
            owner: value.owner.into(),
        }
    }
}

/// Risposta di `GET /api/properties/{id}`: summary + campi completi
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDetailDTO {
    #[serde(flatten)]
    pub summary: PropertySummaryDTO,
    pub description: String,
    pub traces: Vec<TraceDTO>,
    pub images: Vec<ImageDTO>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Property> for PropertyDetailDTO {
    fn from(mut value: Property) -> Self {
        let description = std::mem::take(&mut value.description);
        let traces = std::mem::take(&mut value.traces);
        let images = std::mem::take(&mut value.images);
        let created_at = value.created_at;
        let updated_at = value.updated_at;

        Self {
            summary: value.into(),
            description,
            traces: traces.into_iter().map(TraceDTO::from).collect(),
            images: images.into_iter().map(ImageDTO::from).collect(),
            created_at,
            updated_at,
        }
    }
}
