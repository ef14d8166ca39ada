//! Repository-level error types.

use thiserror::Error;

/// Failures a repository operation can surface.
///
/// `NotFound` is an expected outcome of addressing an absent primary key
/// and must stay distinguishable from store faults; `Constraint` covers
/// store-enforced rules such as the unique username.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Record not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
