use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::instrument;
use uuid::Uuid;

use models::service;

use crate::catalog::repository::ServiceCatalog;
use crate::errors::ServiceError;

/// SeaORM-backed catalog reading the `service` table.
pub struct SeaOrmServiceCatalog {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ServiceCatalog for SeaOrmServiceCatalog {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<service::Model>, ServiceError> {
        service::Entity::find()
            .order_by_asc(service::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get(&self, id: Uuid) -> Result<Option<service::Model>, ServiceError> {
        service::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}
