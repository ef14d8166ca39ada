//! # Pantry Shared
//!
//! The API surface types shared between the server and its clients:
//! request payloads and the success/error response body shapes.

pub mod dto;
pub mod response;

pub use response::{Ack, ErrorDetail};
