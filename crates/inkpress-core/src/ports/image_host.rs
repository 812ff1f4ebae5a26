//! Image hosting port - upload bytes, get back transformed delivery URLs.

use async_trait::async_trait;

/// A file received with a request. The bytes live only as long as the upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Path of the stored file on the host, e.g. `/blogs/cover.png`.
    pub file_path: String,
}

/// A single delivery directive, applied by the host at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformation {
    Quality(String),
    Format(String),
    Width(u32),
}

impl Transformation {
    /// Recipe applied to every blog cover: automatic quality, WebP, max 1280px wide.
    pub fn blog_cover() -> Vec<Transformation> {
        vec![
            Transformation::Quality("auto".to_string()),
            Transformation::Format("webp".to_string()),
            Transformation::Width(1280),
        ]
    }
}

/// Image host trait - abstraction over image CDNs (ImageKit, in-memory).
#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Upload a file into `folder`. Consumes the upload buffer.
    async fn upload(
        &self,
        file: ImageUpload,
        folder: &str,
    ) -> Result<UploadedImage, ImageHostError>;

    /// Build a delivery URL for `path` with the transformations applied in order.
    fn url(&self, path: &str, transformation: &[Transformation]) -> String;
}

/// Image host errors.
#[derive(Debug, thiserror::Error)]
pub enum ImageHostError {
    #[error("Image upload failed: {0}")]
    Transport(String),

    #[error("Image host rejected upload ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected response from image host: {0}")]
    InvalidResponse(String),
}
