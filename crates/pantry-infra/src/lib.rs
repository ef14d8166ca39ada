//! # Pantry Infrastructure
//!
//! Concrete implementations of the ports defined in `pantry-core`:
//! connection management, idempotent schema setup, and the SQL
//! repositories backing the five entity tables.

pub mod database;

pub use database::{DatabaseConfig, DbConn, connect, setup_schema};
