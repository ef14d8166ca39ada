//! # Pantry Core
//!
//! The domain layer of the Pantry record-management service.
//! This crate contains the entity types, the repository port, and the
//! error taxonomy, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
