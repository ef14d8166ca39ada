//! SeaORM entity models, one per table.

pub mod beer;
pub mod post;
pub mod product;
pub mod tea;
pub mod user;
