//! Read-only access to the service catalog.

pub mod repository;
pub mod repo;

pub use repository::ServiceCatalog;
