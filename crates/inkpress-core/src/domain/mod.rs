//! Domain entities - the core business objects.

mod blog;
mod comment;

pub use blog::{Blog, BlogDraft, BlogFilter, Dashboard, NewBlog};
pub use comment::{Comment, CommentEntry, CommentStatus, NewComment};
