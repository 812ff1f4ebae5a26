//! Application services - the use cases exposed over HTTP.

mod admin;
mod blog;

pub use admin::{ADMIN_ROLE, AdminAuthService, AdminCredentials};
pub use blog::{BLOG_IMAGE_FOLDER, BlogService, parse_id};
