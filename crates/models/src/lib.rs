pub mod errors;
pub mod db;
pub mod document;
pub mod service;
pub mod booking;
