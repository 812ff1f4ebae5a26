//! ImageKit client - uploads through the REST API, delivery URLs built locally.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use inkpress_core::ports::{ImageHost, ImageHostError, ImageUpload, Transformation, UploadedImage};

use super::transformed_url;

const DEFAULT_UPLOAD_URL: &str = "https://upload.imagekit.io/api/v1/files/upload";

/// ImageKit account configuration.
#[derive(Debug, Clone)]
pub struct ImageKitConfig {
    pub private_key: String,
    /// e.g. `https://ik.imagekit.io/<imagekit_id>`
    pub url_endpoint: String,
    pub upload_url: String,
}

impl ImageKitConfig {
    /// Load configuration from environment variables.
    /// Returns `None` unless the private key and URL endpoint are both set.
    pub fn from_env() -> Option<Self> {
        let private_key = std::env::var("IMAGEKIT_PRIVATE_KEY").ok()?;
        let url_endpoint = std::env::var("IMAGEKIT_URL_ENDPOINT").ok()?;

        Some(Self {
            private_key,
            url_endpoint,
            upload_url: std::env::var("IMAGEKIT_UPLOAD_URL")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_URL.to_string()),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    file_path: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// ImageKit-backed image host.
pub struct ImageKitClient {
    client: reqwest::Client,
    config: ImageKitConfig,
}

impl ImageKitClient {
    pub fn new(config: ImageKitConfig) -> Result<Self, ImageHostError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ImageHostError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ImageHost for ImageKitClient {
    async fn upload(
        &self,
        file: ImageUpload,
        folder: &str,
    ) -> Result<UploadedImage, ImageHostError> {
        let size = file.bytes.len();
        let form = Form::new()
            .part("file", Part::bytes(file.bytes).file_name(file.file_name.clone()))
            .text("fileName", file.file_name)
            .text("folder", folder.to_string());

        let response = self
            .client
            .post(&self.config.upload_url)
            .basic_auth(&self.config.private_key, Some(""))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ImageHostError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            return Err(ImageHostError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| ImageHostError::InvalidResponse(e.to_string()))?;

        tracing::debug!(file_path = %uploaded.file_path, size, "Uploaded image to ImageKit");

        Ok(UploadedImage {
            file_path: uploaded.file_path,
        })
    }

    fn url(&self, path: &str, transformation: &[Transformation]) -> String {
        transformed_url(&self.config.url_endpoint, path, transformation)
    }
}
