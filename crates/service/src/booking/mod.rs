//! Booking store: list, create, delete and status-only update of booking documents.

pub mod domain;
pub mod repository;
pub mod repo;

pub use repository::BookingStore;
