use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Booking: 按 email 查询预约列表
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_email")
                    .table(Booking::Table)
                    .col(Booking::Email)
                    .to_owned(),
            )
            .await?;

        // Service: service_id 为业务编码
        manager
            .create_index(
                Index::create()
                    .name("idx_service_service_id")
                    .table(Service::Table)
                    .col(Service::ServiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_booking_email").table(Booking::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_service_id").table(Service::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Booking { Table, Email }

#[derive(DeriveIden)]
enum Service { Table, ServiceId }
