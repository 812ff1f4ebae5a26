//! # Inkpress Shared
//!
//! Wire types shared between the API server and its clients.
//! Every response carries a `success` flag; failures carry a `message`.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, Empty};
