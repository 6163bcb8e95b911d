//! Property entity - Documento immobile con i sotto-documenti incorporati
//!
//! Owner, traces e images non hanno un'identità propria: vivono dentro il documento
//! e vengono salvati come colonne JSON nello store MySQL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Indirizzo strutturato. Il filtro per indirizzo lavora solo su `street`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: String,
    pub zip_code: String,
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.city, self.country, self.zip_code
        )
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

/// Evento storico di vendita, append-only e ordinato per occorrenza
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
    #[serde(default)]
    pub is_main_image: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: Address,
    pub price: f64,
    pub property_type: String,
    pub main_image: String,
    #[serde(default)]
    pub images: Vec<PropertyImage>,
    pub description: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub area: f64,
    pub code_internal: String,
    pub year: i32,
    pub owner: Owner,
    #[serde(default)]
    pub traces: Vec<PropertyTrace>,
    // i documenti di seed possono non avere il timestamp: viene fissato all'import
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
