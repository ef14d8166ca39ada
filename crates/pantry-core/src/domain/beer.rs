use serde::{Deserialize, Serialize};

/// Beer entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beer {
    pub id: i32,
    pub style: String,
    pub alcohol: f64,
    pub cereal: String,
}

/// A beer before it has been persisted.
#[derive(Debug, Clone)]
pub struct NewBeer {
    pub style: String,
    pub alcohol: f64,
    pub cereal: String,
}
