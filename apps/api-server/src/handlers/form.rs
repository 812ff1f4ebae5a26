//! Multipart form for blog creation: a JSON `blog` part and an `image` file.

use actix_multipart::{Field, Multipart};
use futures::TryStreamExt;

use inkpress_core::ports::ImageUpload;
use inkpress_shared::dto::BlogFields;

use crate::middleware::error::{AppError, AppResult};

/// Parsed blog creation form. The image bytes are held only for this request.
#[derive(Debug, Default)]
pub struct BlogForm {
    pub fields: BlogFields,
    pub image: Option<ImageUpload>,
}

impl BlogForm {
    /// Read every part of the form, rejecting parts larger than `limit` bytes.
    pub async fn read(mut payload: Multipart, limit: usize) -> AppResult<Self> {
        let mut form = BlogForm::default();

        while let Some(mut field) = payload
            .try_next()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid form data: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_string);

            let bytes = read_field(&mut field, limit).await?;

            match name.as_str() {
                "blog" => {
                    form.fields = serde_json::from_slice(&bytes)
                        .map_err(|e| AppError::BadRequest(format!("Invalid blog data: {e}")))?;
                }
                "image" => {
                    let file_name = file_name.unwrap_or_else(|| "upload".to_string());
                    form.image = Some(ImageUpload::new(file_name, bytes));
                }
                other => tracing::debug!(field = other, "Ignoring unknown form field"),
            }
        }

        Ok(form)
    }
}

async fn read_field(field: &mut Field, limit: usize) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();

    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid form data: {e}")))?
    {
        if buf.len() + chunk.len() > limit {
            return Err(AppError::BadRequest(format!(
                "File too large (limit {limit} bytes)"
            )));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}
