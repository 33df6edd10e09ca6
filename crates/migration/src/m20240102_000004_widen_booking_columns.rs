//! `email` and `status` become unbounded `text` on databases created with the
//! earlier varchar columns.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Booking::Table)
                    .modify_column(ColumnDef::new(Booking::Email).text().null())
                    .modify_column(ColumnDef::new(Booking::Status).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Booking::Table)
                    .modify_column(ColumnDef::new(Booking::Email).string_len(320).null())
                    .modify_column(ColumnDef::new(Booking::Status).string_len(64).null())
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Booking { Table, Email, Status }
