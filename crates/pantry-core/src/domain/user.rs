use serde::{Deserialize, Serialize};

/// User entity - a registered account holder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
}

/// A user before it has been persisted; the store assigns the id.
/// The username is unique at the storage level.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
}
