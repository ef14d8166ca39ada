use serde::{Deserialize, Serialize};

/// Tea entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tea {
    pub id: i32,
    pub style: String,
    pub healthy: bool,
}

/// A tea before it has been persisted.
#[derive(Debug, Clone)]
pub struct NewTea {
    pub style: String,
    pub healthy: bool,
}
