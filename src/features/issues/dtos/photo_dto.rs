use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Allowed photo MIME types
pub const ALLOWED_PHOTO_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// Maximum photo size in bytes (10MB)
pub const MAX_PHOTO_SIZE: usize = 10 * 1024 * 1024;

/// File extension for an allowed photo type
pub fn photo_extension(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        _ => None,
    }
}

/// Upload photo request DTO for OpenAPI documentation.
/// The handler reads the multipart body directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UploadPhotoDto {
    /// JPEG, PNG or WEBP image, at most 10MB
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhotoUploadResponseDto {
    /// Public URL to store as the issue's `photo_url`
    pub url: String,
    pub key: String,
    pub content_type: String,
    pub size: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_allowed_type_has_an_extension() {
        for content_type in ALLOWED_PHOTO_TYPES {
            assert!(photo_extension(content_type).is_some());
        }
        assert_eq!(photo_extension("image/gif"), None);
        assert_eq!(photo_extension("application/pdf"), None);
    }
}
