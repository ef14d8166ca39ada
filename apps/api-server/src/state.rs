//! Application state - shared across all handlers.

use std::sync::Arc;

use pantry_core::domain::{
    Beer, NewBeer, NewPost, NewProduct, NewTea, NewUser, Post, Product, Tea, User,
};
use pantry_core::ports::Repository;
use pantry_infra::DbConn;
use pantry_infra::database::{
    SqlBeerRepository, SqlPostRepository, SqlProductRepository, SqlTeaRepository,
    SqlUserRepository,
};

/// Shared application state: one repository handle per entity table.
///
/// Handlers never see the connection pool directly; every store access
/// goes through a repository port.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn Repository<User, NewUser>>,
    pub posts: Arc<dyn Repository<Post, NewPost>>,
    pub beers: Arc<dyn Repository<Beer, NewBeer>>,
    pub teas: Arc<dyn Repository<Tea, NewTea>>,
    pub products: Arc<dyn Repository<Product, NewProduct>>,
}

impl AppState {
    /// Build the application state over one shared connection pool.
    pub fn new(db: DbConn) -> Self {
        Self {
            users: Arc::new(SqlUserRepository::new(db.clone())),
            posts: Arc::new(SqlPostRepository::new(db.clone())),
            beers: Arc::new(SqlBeerRepository::new(db.clone())),
            teas: Arc::new(SqlTeaRepository::new(db.clone())),
            products: Arc::new(SqlProductRepository::new(db)),
        }
    }
}
