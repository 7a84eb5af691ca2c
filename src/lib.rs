#![deny(warnings)]

#[macro_use]
extern crate actix_web;

// Re-export all public modules
pub mod api;
pub mod config;
pub mod controllers;
pub mod database;
pub mod errors;
pub mod models;
pub mod requests;
pub mod responses;
pub mod router;
pub mod services;

// Testing utilities (always available for integration tests)
pub mod testing;

// Re-export commonly used types for convenience
pub use database::{DatabaseError, DatabasePool};
pub use errors::ApiError;
