//! Request payloads - one flat object per entity, snake_case fields.
//!
//! The same payload serves POST (create) and PUT (full replace); every
//! field is required, so a missing or mistyped field is rejected at
//! deserialization time, before any store access.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPayload {
    pub title: String,
    pub content: String,
    pub user_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeerPayload {
    pub style: String,
    pub alcohol: f64,
    pub cereal: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeaPayload {
    pub style: String,
    pub healthy: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
}
