//! Migrator registering table migrations in dependency order.
//! Column changes to existing tables come after the indexes.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_service;
mod m20240101_000002_create_booking;
mod m20240101_000003_add_indexes;
mod m20240102_000004_widen_booking_columns;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_service::Migration),
            Box::new(m20240101_000002_create_booking::Migration),
            Box::new(m20240101_000003_add_indexes::Migration),
            Box::new(m20240102_000004_widen_booking_columns::Migration),
        ]
    }
}
