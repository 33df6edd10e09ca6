use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use serde_json::{Map, Value};
use tracing::{info, instrument};
use uuid::Uuid;

use models::booking;

use crate::booking::domain::{DeleteAck, InsertAck, UpdateAck};
use crate::booking::repository::BookingStore;
use crate::errors::ServiceError;

/// SeaORM-backed booking store over the `booking` table.
pub struct SeaOrmBookingStore {
    pub db: DatabaseConnection,
}

#[async_trait]
impl BookingStore for SeaOrmBookingStore {
    #[instrument(skip(self))]
    async fn list(&self, email: Option<&str>) -> Result<Vec<booking::Model>, ServiceError> {
        let mut query = booking::Entity::find();
        if let Some(email) = email {
            query = query.filter(booking::Column::Email.eq(email));
        }
        query
            .order_by_asc(booking::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    #[instrument(skip(self, fields), fields(keys = fields.len()))]
    async fn create(&self, fields: Map<String, Value>) -> Result<InsertAck, ServiceError> {
        let model = booking::new_model(fields);
        let id = model.id;
        booking::Entity::insert(model.into_insert())
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        info!(booking_id = %id, "booking_created");
        Ok(InsertAck::new(id))
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: Uuid) -> Result<DeleteAck, ServiceError> {
        let res = booking::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(DeleteAck::new(res.rows_affected))
    }

    /// One UPDATE that writes only when the stored `status` differs. A row that is
    /// missing, or was deleted concurrently, reports `matchedCount: 0`.
    #[instrument(skip(self, status), fields(id = %id))]
    async fn update_status(&self, id: Uuid, status: Value) -> Result<UpdateAck, ServiceError> {
        let mirrored = status.as_str().map(str::to_string);
        let res = booking::Entity::update_many()
            .col_expr(booking::Column::Status, Expr::value(mirrored))
            .col_expr(
                booking::Column::Document,
                Expr::cust_with_values("jsonb_set(\"document\", '{status}', $1, true)", [status.clone()]),
            )
            .filter(booking::Column::Id.eq(id))
            .filter(Expr::cust_with_values("(\"document\" -> 'status') IS DISTINCT FROM $1", [status]))
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        if res.rows_affected > 0 {
            return Ok(UpdateAck::new(1, 1));
        }

        // 未写入：要么记录不存在，要么 status 已相同
        let exists = booking::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .is_some();
        Ok(if exists { UpdateAck::new(1, 0) } else { UpdateAck::unmatched() })
    }
}
