//! # Inkpress Infrastructure
//!
//! Concrete implementations of the ports defined in `inkpress-core`.
//! This crate contains the document store, image host and auth integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `postgres` - PostgreSQL document store via SeaORM
//! - `imagekit` - ImageKit image hosting via reqwest

pub mod auth;
pub mod database;
pub mod image;

// Re-exports - In-Memory
pub use database::{InMemoryBlogRepository, InMemoryCommentRepository};
pub use image::InMemoryImageHost;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, DatabaseConnections};

#[cfg(feature = "imagekit")]
pub use image::{ImageKitClient, ImageKitConfig};
