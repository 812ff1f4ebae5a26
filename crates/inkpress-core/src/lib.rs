//! # Inkpress Core
//!
//! The domain layer of the Inkpress blog backend.
//! This crate contains the blog/comment business rules and the ports that
//! infrastructure must implement. It has no database or HTTP dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, ErrorKind};
pub use service::{AdminAuthService, BlogService};
