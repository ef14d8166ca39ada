//! Response body shapes shared by every resource.

use serde::{Deserialize, Serialize};

/// Acknowledgment body returned by PUT and DELETE.
///
/// The message template is uniform across entities: the entity name
/// followed by the action, e.g. `"Beer updated successfully"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub message: String,
}

impl Ack {
    pub fn updated(entity: &str) -> Self {
        Self {
            message: format!("{entity} updated successfully"),
        }
    }

    pub fn deleted(entity: &str) -> Self {
        Self {
            message: format!("{entity} deleted successfully"),
        }
    }
}

/// Error body carried by every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// The standard lookup-failure wording, e.g. `"Beer 7 not found"`.
    pub fn not_found(entity: &str, id: i32) -> Self {
        Self {
            detail: format!("{entity} {id} not found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_wording_names_the_entity() {
        assert_eq!(Ack::updated("Tea").message, "Tea updated successfully");
        assert_eq!(Ack::deleted("User").message, "User deleted successfully");
    }

    #[test]
    fn not_found_wording_carries_the_id() {
        assert_eq!(ErrorDetail::not_found("Beer", 20).detail, "Beer 20 not found");
    }
}
