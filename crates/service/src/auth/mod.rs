//! Stateless bearer tokens: issuing from a caller-supplied identity payload and verifying on protected routes.

pub mod errors;
pub mod token;

pub use token::{Claims, TokenService};
