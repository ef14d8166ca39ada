//! Database connection management and SQL repositories.

mod connections;
mod schema;
mod sql_base;
mod sql_repo;

pub mod entity;

pub use sea_orm::DbConn;

pub use connections::{DatabaseConfig, connect};
pub use schema::setup_schema;
pub use sql_base::SqlRepository;
pub use sql_repo::{
    SqlBeerRepository, SqlPostRepository, SqlProductRepository, SqlTeaRepository,
    SqlUserRepository,
};

#[cfg(test)]
mod tests;
