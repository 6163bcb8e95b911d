//! PropertyRepository - Repository MySQL per la gestione degli immobili
//!
//! I campi scalari del documento hanno una colonna dedicata, owner/traces/images sono
//! colonne JSON. La colonna `seq` (AUTO_INCREMENT) fissa l'ordine di inserimento, usato
//! come unico ordinamento delle letture.

use super::filter::{PageRequest, PropertyFilter, PropertyPredicate};
use super::traits::{PropertyStore, StoreError};
use crate::entities::{Address, Owner, Property, PropertyImage, PropertyTrace};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder};
use tracing::{debug, info, instrument, warn};

/// Colonne lette in ogni SELECT, nell'ordine di `PropertyRow`
const COLUMNS: &str = "id, name, street, city, country, zip_code, price, property_type, \
    main_image, description, bedrooms, bathrooms, area, code_internal, year, owner, traces, \
    images, created_at, updated_at";

/// Riga della tabella `properties`
#[derive(FromRow)]
struct PropertyRow {
    id: String,
    name: String,
    street: String,
    city: String,
    country: String,
    zip_code: String,
    price: f64,
    property_type: String,
    main_image: String,
    description: String,
    bedrooms: i32,
    bathrooms: i32,
    area: f64,
    code_internal: String,
    year: i32,
    owner: Json<Owner>,
    traces: Json<Vec<PropertyTrace>>,
    images: Json<Vec<PropertyImage>>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<PropertyRow> for Property {
    fn from(row: PropertyRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            address: Address {
                street: row.street,
                city: row.city,
                country: row.country,
                zip_code: row.zip_code,
            },
            price: row.price,
            property_type: row.property_type,
            main_image: row.main_image,
            images: row.images.0,
            description: row.description,
            bedrooms: row.bedrooms,
            bathrooms: row.bathrooms,
            area: row.area,
            code_internal: row.code_internal,
            year: row.year,
            owner: row.owner.0,
            traces: row.traces.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// PROPERTY REPO
pub struct PropertyRepository {
    connection_pool: MySqlPool,
}

impl PropertyRepository {
    pub fn new(connection_pool: MySqlPool) -> Self {
        Self { connection_pool }
    }

    /// Aggiunge la clausola WHERE con i predicati in AND. Nessun predicato = nessuna clausola.
    fn push_predicates(query_builder: &mut QueryBuilder<'_, MySql>, filter: &PropertyFilter) {
        for (i, predicate) in filter.predicates().into_iter().enumerate() {
            query_builder.push(if i == 0 { " WHERE " } else { " AND " });
            match predicate {
                PropertyPredicate::NameContains(needle) => {
                    query_builder.push("LOWER(name) LIKE ");
                    query_builder.push_bind(like_pattern(&needle));
                }
                PropertyPredicate::StreetContains(needle) => {
                    query_builder.push("LOWER(street) LIKE ");
                    query_builder.push_bind(like_pattern(&needle));
                }
                PropertyPredicate::PriceAtLeast(bound) => {
                    query_builder.push("price >= ");
                    query_builder.push_bind(bound);
                }
                PropertyPredicate::PriceAtMost(bound) => {
                    query_builder.push("price <= ");
                    query_builder.push_bind(bound);
                }
            }
        }
    }
}

/// `%needle%` in minuscolo, con i caratteri speciali di LIKE escapati
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn map_insert_error(err: sqlx::Error, id: &str) -> StoreError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::AlreadyExists(id.to_string())
        }
        _ => StoreError::Database(err),
    }
}

#[async_trait]
impl PropertyStore for PropertyRepository {
    #[instrument(skip(self, filter))]
    async fn count(&self, filter: &PropertyFilter) -> Result<u64, StoreError> {
        let mut query_builder = QueryBuilder::<MySql>::new("SELECT COUNT(*) FROM properties");
        Self::push_predicates(&mut query_builder, filter);

        let count: i64 = query_builder
            .build_query_scalar()
            .fetch_one(&self.connection_pool)
            .await?;

        debug!("Total properties count: {}", count);
        Ok(count.max(0) as u64)
    }

    #[instrument(skip(self, filter), fields(page = page.page_number, size = page.page_size))]
    async fn find_page(
        &self,
        filter: &PropertyFilter,
        page: PageRequest,
    ) -> Result<Vec<Property>, StoreError> {
        let mut query_builder = QueryBuilder::<MySql>::new("SELECT ");
        query_builder.push(COLUMNS);
        query_builder.push(" FROM properties");
        Self::push_predicates(&mut query_builder, filter);
        query_builder.push(" ORDER BY seq ASC LIMIT ");
        query_builder.push_bind(page.limit() as i64);
        query_builder.push(" OFFSET ");
        query_builder.push_bind(page.offset() as i64);

        let rows: Vec<PropertyRow> = query_builder
            .build_query_as()
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Retrieved {} properties from page {}", rows.len(), page.page_number);
        Ok(rows.into_iter().map(Property::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, StoreError> {
        let sql = format!("SELECT {} FROM properties WHERE id = ?", COLUMNS);
        let row = sqlx::query_as::<_, PropertyRow>(&sql)
            .bind(id)
            .fetch_optional(&self.connection_pool)
            .await?;

        if row.is_some() {
            debug!("Property found");
        } else {
            warn!("Property not found");
        }
        Ok(row.map(Property::from))
    }

    async fn find_all(&self) -> Result<Vec<Property>, StoreError> {
        let sql = format!("SELECT {} FROM properties ORDER BY seq ASC", COLUMNS);
        let rows = sqlx::query_as::<_, PropertyRow>(&sql)
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Retrieved {} total properties", rows.len());
        Ok(rows.into_iter().map(Property::from).collect())
    }

    #[instrument(skip(self, property), fields(id = %property.id))]
    async fn insert(&self, property: &Property) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO properties (
                id, name, street, city, country, zip_code, price, property_type,
                main_image, description, bedrooms, bathrooms, area, code_internal, year,
                owner, traces, images, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&property.id)
        .bind(&property.name)
        .bind(&property.address.street)
        .bind(&property.address.city)
        .bind(&property.address.country)
        .bind(&property.address.zip_code)
        .bind(property.price)
        .bind(&property.property_type)
        .bind(&property.main_image)
        .bind(&property.description)
        .bind(property.bedrooms)
        .bind(property.bathrooms)
        .bind(property.area)
        .bind(&property.code_internal)
        .bind(property.year)
        .bind(Json(&property.owner))
        .bind(Json(&property.traces))
        .bind(Json(&property.images))
        .bind(property.created_at)
        .bind(property.updated_at)
        .execute(&self.connection_pool)
        .await
        .map_err(|e| map_insert_error(e, &property.id))?;

        info!("Property added");
        Ok(())
    }

    #[instrument(skip(self, property), fields(id = %property.id))]
    async fn update(&self, property: &Property) -> Result<Property, StoreError> {
        // updated_at viene scritto nello stesso statement del documento
        let result = sqlx::query(
            r#"
            UPDATE properties SET
                name = ?, street = ?, city = ?, country = ?, zip_code = ?, price = ?,
                property_type = ?, main_image = ?, description = ?, bedrooms = ?,
                bathrooms = ?, area = ?, code_internal = ?, year = ?, owner = ?,
                traces = ?, images = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&property.name)
        .bind(&property.address.street)
        .bind(&property.address.city)
        .bind(&property.address.country)
        .bind(&property.address.zip_code)
        .bind(property.price)
        .bind(&property.property_type)
        .bind(&property.main_image)
        .bind(&property.description)
        .bind(property.bedrooms)
        .bind(property.bathrooms)
        .bind(property.area)
        .bind(&property.code_internal)
        .bind(property.year)
        .bind(Json(&property.owner))
        .bind(Json(&property.traces))
        .bind(Json(&property.images))
        .bind(Utc::now())
        .bind(&property.id)
        .execute(&self.connection_pool)
        .await?;

        if result.rows_affected() == 0 {
            warn!("Property to update not found");
            return Err(StoreError::NotFound(property.id.clone()));
        }

        info!("Property updated");
        self.find_by_id(&property.id)
            .await?
            .ok_or_else(|| StoreError::NotFound(property.id.clone()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM properties WHERE id = ?")
            .bind(id)
            .execute(&self.connection_pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Property deleted");
        }
        Ok(deleted)
    }
}
