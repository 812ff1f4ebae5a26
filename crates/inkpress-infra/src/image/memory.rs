//! In-memory image host - used when ImageKit is not configured, and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use inkpress_core::ports::{ImageHost, ImageHostError, ImageUpload, Transformation, UploadedImage};

use super::transformed_url;

/// Default URL endpoint for images served from memory.
pub const MEMORY_URL_ENDPOINT: &str = "memory://images";

/// Keeps uploaded files in a map keyed by their stored path.
///
/// Note: Data is lost on process restart.
pub struct InMemoryImageHost {
    url_endpoint: String,
    files: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryImageHost {
    pub fn new() -> Self {
        Self::with_endpoint(MEMORY_URL_ENDPOINT)
    }

    pub fn with_endpoint(url_endpoint: impl Into<String>) -> Self {
        Self {
            url_endpoint: url_endpoint.into(),
            files: RwLock::new(HashMap::new()),
        }
    }

    /// Bytes stored at `file_path`, if any.
    pub async fn get(&self, file_path: &str) -> Option<Vec<u8>> {
        self.files.read().await.get(file_path).cloned()
    }

    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }
}

impl Default for InMemoryImageHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageHost for InMemoryImageHost {
    async fn upload(
        &self,
        file: ImageUpload,
        folder: &str,
    ) -> Result<UploadedImage, ImageHostError> {
        // Unique suffix, as the real host does for name clashes.
        let folder = folder.trim_matches('/');
        let file_path = format!(
            "/{folder}/{}_{}",
            Uuid::new_v4().simple(),
            url_safe_name(&file.file_name)
        );

        tracing::debug!(file_path = %file_path, size = file.bytes.len(), "Stored image in memory");
        self.files.write().await.insert(file_path.clone(), file.bytes);

        Ok(UploadedImage { file_path })
    }

    fn url(&self, path: &str, transformation: &[Transformation]) -> String {
        transformed_url(&self.url_endpoint, path, transformation)
    }
}

/// Replace every character outside `[A-Za-z0-9._-]` so the stored path can
/// be embedded in a delivery URL as-is.
fn url_safe_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
