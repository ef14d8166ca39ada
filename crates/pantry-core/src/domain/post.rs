use serde::{Deserialize, Serialize};

/// Post entity - a short piece of authored content.
///
/// `user_id` is nominal: it is not checked against the users table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub user_id: i32,
}

/// A post before it has been persisted.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user_id: i32,
}
