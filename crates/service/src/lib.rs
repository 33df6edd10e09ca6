//! Service layer for the car-doctor backend.
//! - Repository traits for the service catalog and booking store, with SeaORM and in-memory implementations.
//! - Stateless bearer token issuing and verification.
//! - Error types shared by the HTTP layer.

pub mod errors;
pub mod ids;
pub mod auth;
pub mod catalog;
pub mod booking;
