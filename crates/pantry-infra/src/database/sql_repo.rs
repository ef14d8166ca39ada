//! SQL repository aliases, one per entity table.

use super::entity::{beer, post, product, tea, user};
use super::sql_base::SqlRepository;

pub type SqlUserRepository = SqlRepository<user::Entity>;
pub type SqlPostRepository = SqlRepository<post::Entity>;
pub type SqlBeerRepository = SqlRepository<beer::Entity>;
pub type SqlTeaRepository = SqlRepository<tea::Entity>;
pub type SqlProductRepository = SqlRepository<product::Entity>;
