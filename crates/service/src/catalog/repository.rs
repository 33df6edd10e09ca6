use async_trait::async_trait;
use models::service;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Catalog lookups. Results are unbounded and unsorted beyond insertion order.
#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<service::Model>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<service::Model>, ServiceError>;
}

/// In-memory catalog for tests and local runs without a database
pub mod mock {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryServiceCatalog {
        services: RwLock<Vec<service::Model>>,
    }

    impl InMemoryServiceCatalog {
        /// Add a catalog row, returning its identifier.
        ///
        /// # Examples
        /// ```
        /// use service::catalog::{ServiceCatalog, repository::mock::InMemoryServiceCatalog};
        /// let catalog = InMemoryServiceCatalog::default();
        /// let id = tokio_test::block_on(catalog.insert(models::service::new_model(
        ///     "01", "Oil Change", serde_json::json!("20.00"), "oil.jpg", Default::default(),
        /// )));
        /// let found = tokio_test::block_on(catalog.get(id)).unwrap();
        /// assert_eq!(found.unwrap().title, "Oil Change");
        /// ```
        pub async fn insert(&self, model: service::Model) -> Uuid {
            let id = model.id;
            self.services.write().await.push(model);
            id
        }
    }

    #[async_trait]
    impl ServiceCatalog for InMemoryServiceCatalog {
        async fn list(&self) -> Result<Vec<service::Model>, ServiceError> {
            Ok(self.services.read().await.clone())
        }

        async fn get(&self, id: Uuid) -> Result<Option<service::Model>, ServiceError> {
            Ok(self.services.read().await.iter().find(|s| s.id == id).cloned())
        }
    }
}
