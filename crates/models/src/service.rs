//! Service catalog entity. Read-only from the application's point of view.

use sea_orm::entity::prelude::*;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub service_id: String,
    pub title: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub price: Json,
    pub img: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub details: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The four fields returned when a single service is looked up.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceSummary {
    pub title: String,
    pub price: Value,
    pub service_id: String,
    pub img: String,
}

impl From<&Model> for ServiceSummary {
    fn from(m: &Model) -> Self {
        Self {
            title: m.title.clone(),
            price: m.price.clone(),
            service_id: m.service_id.clone(),
            img: m.img.clone(),
        }
    }
}

impl Model {
    /// Full catalog document: `details` merged with the named columns and `_id`.
    pub fn to_document(&self) -> Value {
        let mut fields = document::as_object(&self.details);
        fields.insert("service_id".into(), Value::String(self.service_id.clone()));
        fields.insert("title".into(), Value::String(self.title.clone()));
        fields.insert("price".into(), self.price.clone());
        fields.insert("img".into(), Value::String(self.img.clone()));
        document::render(self.id, &fields)
    }
}

/// Build a catalog row with a fresh identifier. Used by seeding tools and tests.
pub fn new_model(service_id: &str, title: &str, price: Value, img: &str, details: Map<String, Value>) -> Model {
    Model {
        id: Uuid::new_v4(),
        service_id: service_id.to_string(),
        title: title.to_string(),
        price,
        img: img.to_string(),
        details: Value::Object(details),
        created_at: Utc::now().into(),
    }
}
