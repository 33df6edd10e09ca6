//! Booking entity. The caller's JSON is kept verbatim in `document`;
//! `email` and `status` mirror the string values of those keys.

use sea_orm::{entity::prelude::*, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::{self, ID_KEY};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "booking")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: Option<String>,
    pub status: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub document: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Turn a caller document into a new row. Any `_id` the caller sent is dropped;
/// the identifier is always assigned here.
pub fn new_model(mut fields: Map<String, Value>) -> Model {
    fields.remove(ID_KEY);
    Model {
        id: Uuid::new_v4(),
        email: document::string_field(&fields, "email"),
        status: document::string_field(&fields, "status"),
        document: Value::Object(fields),
        created_at: Utc::now().into(),
    }
}

impl Model {
    pub fn to_document(&self) -> Value {
        document::render(self.id, &document::as_object(&self.document))
    }

    /// Overwrite `status` with `status`. Returns `false` when the stored value is already equal,
    /// in which case nothing changes.
    pub fn apply_status(&mut self, status: Value) -> bool {
        let mut fields = document::as_object(&self.document);
        if fields.get("status") == Some(&status) {
            return false;
        }
        self.status = status.as_str().map(str::to_string);
        fields.insert("status".into(), status);
        self.document = Value::Object(fields);
        true
    }

    /// Active model with every column set, for a plain INSERT.
    pub fn into_insert(self) -> ActiveModel {
        ActiveModel {
            id: Set(self.id),
            email: Set(self.email),
            status: Set(self.status),
            document: Set(self.document),
            created_at: Set(self.created_at),
        }
    }
}
