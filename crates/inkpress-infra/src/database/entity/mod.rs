//! SeaORM entities for the `blogs` and `comments` tables.

pub mod blog;
pub mod comment;
