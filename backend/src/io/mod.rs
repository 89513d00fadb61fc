//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services.
//!
//! Requests arrive form-encoded and are handed to the domain as raw form
//! structs from the `shared` crate; responses leave as JSON DTOs built by the
//! mappers. Domain errors are translated into status codes in one place
//! (`rest::error`).

pub mod rest;

pub use rest::*;
