use async_trait::async_trait;
use models::booking;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::domain::{DeleteAck, InsertAck, UpdateAck};
use crate::errors::ServiceError;

/// Booking persistence. Every call is one unconditional operation against the store.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// All bookings, or only those whose `email` equals `email` when given.
    async fn list(&self, email: Option<&str>) -> Result<Vec<booking::Model>, ServiceError>;
    /// Persist `fields` verbatim under a fresh identifier.
    async fn create(&self, fields: Map<String, Value>) -> Result<InsertAck, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<DeleteAck, ServiceError>;
    /// Set `status` and nothing else.
    async fn update_status(&self, id: Uuid, status: Value) -> Result<UpdateAck, ServiceError>;
}

/// In-memory booking store for tests and local runs without a database
pub mod mock {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryBookingStore {
        bookings: RwLock<Vec<booking::Model>>,
    }

    impl InMemoryBookingStore {
        pub async fn count(&self) -> usize {
            self.bookings.read().await.len()
        }
    }

    #[async_trait]
    impl BookingStore for InMemoryBookingStore {
        async fn list(&self, email: Option<&str>) -> Result<Vec<booking::Model>, ServiceError> {
            let bookings = self.bookings.read().await;
            Ok(bookings
                .iter()
                .filter(|b| email.map_or(true, |e| b.email.as_deref() == Some(e)))
                .cloned()
                .collect())
        }

        /// # Examples
        /// ```
        /// use service::booking::{BookingStore, repository::mock::InMemoryBookingStore};
        /// let store = InMemoryBookingStore::default();
        /// let doc = serde_json::json!({"email": "u@e.com", "status": "pending"});
        /// let ack = tokio_test::block_on(store.create(doc.as_object().unwrap().clone())).unwrap();
        /// let listed = tokio_test::block_on(store.list(Some("u@e.com"))).unwrap();
        /// assert_eq!(listed.len(), 1);
        /// assert_eq!(listed[0].id, ack.inserted_id);
        /// ```
        async fn create(&self, fields: Map<String, Value>) -> Result<InsertAck, ServiceError> {
            let model = booking::new_model(fields);
            let id = model.id;
            self.bookings.write().await.push(model);
            Ok(InsertAck::new(id))
        }

        async fn delete(&self, id: Uuid) -> Result<DeleteAck, ServiceError> {
            let mut bookings = self.bookings.write().await;
            let before = bookings.len();
            bookings.retain(|b| b.id != id);
            Ok(DeleteAck::new((before - bookings.len()) as u64))
        }

        async fn update_status(&self, id: Uuid, status: Value) -> Result<UpdateAck, ServiceError> {
            let mut bookings = self.bookings.write().await;
            match bookings.iter_mut().find(|b| b.id == id) {
                Some(b) => {
                    let modified = b.apply_status(status);
                    Ok(UpdateAck::new(1, u64::from(modified)))
                }
                None => Ok(UpdateAck::unmatched()),
            }
        }
    }

}
