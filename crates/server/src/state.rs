use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{
    auth::TokenService,
    booking::{repo::seaorm::SeaOrmBookingStore, BookingStore},
    catalog::{repo::seaorm::SeaOrmServiceCatalog, ServiceCatalog},
};

/// Handles shared by every request. Cloning is cheap; all members are reference counted.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<dyn ServiceCatalog>,
    pub bookings: Arc<dyn BookingStore>,
    pub tokens: Arc<TokenService>,
}

impl ServerState {
    pub fn new(catalog: Arc<dyn ServiceCatalog>, bookings: Arc<dyn BookingStore>, tokens: TokenService) -> Self {
        Self { catalog, bookings, tokens: Arc::new(tokens) }
    }

    /// Production wiring: both stores share the one connection pool.
    pub fn with_database(db: DatabaseConnection, access_token_secret: &str) -> Self {
        Self::new(
            Arc::new(SeaOrmServiceCatalog { db: db.clone() }),
            Arc::new(SeaOrmBookingStore { db }),
            TokenService::new(access_token_secret),
        )
    }
}
