use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::issues::dtos::{photo_extension, PhotoUploadResponseDto};
use crate::modules::storage::MinIOClient;

/// Stores issue photos in object storage
pub struct PhotoService {
    minio_client: Arc<MinIOClient>,
}

impl PhotoService {
    pub fn new(minio_client: Arc<MinIOClient>) -> Self {
        Self { minio_client }
    }

    pub async fn upload_photo(
        &self,
        uid: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<PhotoUploadResponseDto> {
        let extension = photo_extension(content_type).ok_or_else(|| {
            AppError::BadRequest(format!("Unsupported photo type '{}'", content_type))
        })?;

        let size = data.len() as i64;
        let key = self
            .minio_client
            .photo_key(uid, &Uuid::now_v7().to_string(), extension);

        self.minio_client
            .upload(&key, data, content_type)
            .await
            .inspect_err(|e| tracing::error!("Photo upload failed for {}: {}", uid, e))?;

        tracing::info!("Photo uploaded: key={}, size={}, user={}", key, size, uid);

        Ok(PhotoUploadResponseDto {
            url: self.minio_client.get_public_url(&key),
            key,
            content_type: content_type.to_string(),
            size,
        })
    }
}
