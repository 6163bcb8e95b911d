use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{TimeZone, Utc};
use estate_server::core::AppState;
use estate_server::entities::{Address, Owner, Property, PropertyImage, PropertyTrace};
use estate_server::repositories::{
    InMemoryPropertyRepository, PageRequest, PropertyFilter, PropertyStore, StoreError,
};
use std::sync::Arc;

/// Crea un AppState per i test sopra uno store qualsiasi
pub fn create_test_state(store: Arc<dyn PropertyStore>) -> Arc<AppState> {
    Arc::new(AppState::with_store(store))
}

/// AppState con il catalogo di test (`sample_properties`) in memoria
pub fn create_seeded_state() -> Arc<AppState> {
    create_test_state(Arc::new(InMemoryPropertyRepository::with_documents(
        sample_properties(),
    )))
}

/// Crea un TestServer per i test
///
/// # Arguments
/// * `state` - AppState da utilizzare per il server
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = estate_server::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

fn owner(name: &str) -> Owner {
    Owner {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "555-0100".to_string(),
        address: "1 Owner Way".to_string(),
        photo: format!("{}.jpg", name.to_lowercase().replace(' ', "-")),
        birthday: Utc.with_ymd_and_hms(1975, 5, 20, 0, 0, 0).unwrap(),
    }
}

fn property(id: &str, name: &str, street: &str, price: f64) -> Property {
    Property {
        id: id.to_string(),
        name: name.to_string(),
        address: Address {
            street: street.to_string(),
            city: "New York".to_string(),
            country: "USA".to_string(),
            zip_code: "10021".to_string(),
        },
        price,
        property_type: "House".to_string(),
        main_image: format!("{}.jpg", id),
        images: vec![],
        description: format!("{} description", name),
        bedrooms: 3,
        bathrooms: 2,
        area: 150.0,
        code_internal: id.to_uppercase(),
        year: 2010,
        owner: owner("Jane Doe"),
        traces: vec![],
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        updated_at: None,
    }
}

/// Catalogo di test: 2 immobili "Luxury" + 23 generici (25 in totale)
pub fn sample_properties() -> Vec<Property> {
    let mut penthouse = property(
        "prop-luxury-001",
        "Luxury Penthouse",
        "742 Park Avenue",
        750000.0,
    );
    penthouse.owner = owner("John Smith");
    penthouse.images = vec![
        PropertyImage {
            id: "img-1".to_string(),
            image_url: "penthouse-living.jpg".to_string(),
            is_main_image: true,
        },
        PropertyImage {
            id: "img-2".to_string(),
            image_url: "penthouse-terrace.jpg".to_string(),
            is_main_image: false,
        },
    ];
    penthouse.traces = vec![
        PropertyTrace {
            date_sale: Utc.with_ymd_and_hms(2015, 6, 1, 0, 0, 0).unwrap(),
            name: "First sale".to_string(),
            value: 600000.0,
            tax: 12000.0,
        },
        PropertyTrace {
            date_sale: Utc.with_ymd_and_hms(2020, 9, 15, 0, 0, 0).unwrap(),
            name: "Resale".to_string(),
            value: 700000.0,
            tax: 14000.0,
        },
    ];

    let mut documents = vec![
        penthouse,
        property("prop-cottage-002", "Country Cottage", "12 Elm Road", 320000.0),
        property("prop-villa-003", "Luxury Villa", "5 Ocean Drive", 2500000.0),
    ];
    documents.extend((4..=25).map(|n| {
        property(
            &format!("prop-{:03}", n),
            &format!("Apartment {}", n),
            &format!("{} Main Street", n),
            100000.0 + f64::from(n) * 10000.0,
        )
    }));
    documents
}

/// Store che fallisce sempre, per verificare il percorso 500
pub struct FailingStore;

impl FailingStore {
    fn failure() -> StoreError {
        StoreError::Unavailable("connection refused by db.internal:3306".to_string())
    }
}

#[async_trait]
impl PropertyStore for FailingStore {
    async fn count(&self, _filter: &PropertyFilter) -> Result<u64, StoreError> {
        Err(Self::failure())
    }

    async fn find_page(
        &self,
        _filter: &PropertyFilter,
        _page: PageRequest,
    ) -> Result<Vec<Property>, StoreError> {
        Err(Self::failure())
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Property>, StoreError> {
        Err(Self::failure())
    }

    async fn find_all(&self) -> Result<Vec<Property>, StoreError> {
        Err(Self::failure())
    }

    async fn insert(&self, _property: &Property) -> Result<(), StoreError> {
        Err(Self::failure())
    }

    async fn update(&self, _property: &Property) -> Result<Property, StoreError> {
        Err(Self::failure())
    }

    async fn delete(&self, _id: &str) -> Result<bool, StoreError> {
        Err(Self::failure())
    }
}
