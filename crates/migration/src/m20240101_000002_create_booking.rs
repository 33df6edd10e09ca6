//! Create `booking` table.
//!
//! `document` stores the caller's booking JSON verbatim; `email` and `status`
//! are copies of the matching document keys for filtering.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(uuid(Booking::Id).primary_key())
                    .col(ColumnDef::new(Booking::Email).text().null())
                    .col(ColumnDef::new(Booking::Status).text().null())
                    .col(json_binary(Booking::Document).not_null())
                    .col(timestamp_with_time_zone(Booking::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Booking::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Booking { Table, Id, Email, Status, Document, CreatedAt }
