//! MinIO/S3-compatible storage client
//!
//! Stores issue photos under a publicly readable prefix and hands out their URLs.
//!
//! Uses rust-s3 crate for lightweight S3 operations.

use s3::creds::Credentials;
use s3::{Bucket, BucketConfiguration, Region};
use tracing::{debug, info, warn};

use crate::core::config::MinIOConfig;
use crate::core::error::AppError;

/// MinIO/S3-compatible storage client
pub struct MinIOClient {
    bucket: Box<Bucket>,
    region: Region,
    credentials: Credentials,
    endpoint: String,
    public_endpoint: String,
    public_prefix: String,
}

impl MinIOClient {
    /// Build the client; no request is made until the first operation
    pub fn new(config: MinIOConfig) -> Result<Self, AppError> {
        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        )
        .map_err(|e| AppError::Internal(format!("Failed to create MinIO credentials: {}", e)))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        };

        let mut bucket = Bucket::new(&config.bucket, region.clone(), credentials.clone())
            .map_err(|e| AppError::Internal(format!("Failed to create MinIO bucket: {}", e)))?;

        // Path-style URLs for MinIO (http://endpoint/bucket instead of http://bucket.endpoint)
        bucket.set_path_style();

        Ok(Self {
            bucket,
            region,
            credentials,
            endpoint: config.endpoint,
            public_endpoint: config.public_endpoint.trim_end_matches('/').to_string(),
            public_prefix: config.public_prefix.trim_matches('/').to_string(),
        })
    }

    /// Ensure the bucket exists, create if not
    ///
    /// Anonymous read on the public prefix is provisioned with the bucket
    /// (`mc anonymous set download <alias>/<bucket>/<prefix>`).
    pub async fn ensure_bucket_exists(&self) -> Result<(), AppError> {
        let result = Bucket::create_with_path_style(
            &self.bucket.name(),
            self.region.clone(),
            self.credentials.clone(),
            BucketConfiguration::default(),
        )
        .await;

        match result {
            Ok(_) => {
                info!("Bucket '{}' created successfully", self.bucket.name());
            }
            Err(e) => {
                let error_str = e.to_string();
                if error_str.contains("BucketAlreadyOwnedByYou")
                    || error_str.contains("BucketAlreadyExists")
                    || error_str.contains("already own it")
                {
                    debug!("Bucket '{}' already exists", self.bucket.name());
                } else {
                    warn!(
                        "Could not create bucket '{}' at {}: {}. Assuming it exists.",
                        self.bucket.name(),
                        self.endpoint,
                        e
                    );
                }
            }
        }

        Ok(())
    }

    /// Object key for a new issue photo: `{public_prefix}/issues/{uid}/{photo_id}.{ext}`
    pub fn photo_key(&self, uid: &str, photo_id: &str, extension: &str) -> String {
        format!(
            "{}/issues/{}/{}.{}",
            self.public_prefix, uid, photo_id, extension
        )
    }

    /// Upload an object and return its key
    pub async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        self.bucket
            .put_object_with_content_type(key, &data, content_type)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to upload file '{}': {}", key, e)))?;

        debug!("Uploaded file '{}' to bucket '{}'", key, self.bucket.name());
        Ok(key.to_string())
    }

    /// Direct URL for an object under the public prefix
    pub fn get_public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.public_endpoint, self.bucket.name(), key)
    }

    pub fn bucket_name(&self) -> String {
        self.bucket.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MinIOClient {
        MinIOClient::new(MinIOConfig {
            endpoint: "http://minio:9000".to_string(),
            public_endpoint: "https://cdn.example.com/".to_string(),
            access_key: "minioadmin".to_string(),
            secret_key: "minioadmin".to_string(),
            bucket: "nagrik-seva-uploads".to_string(),
            region: "us-east-1".to_string(),
            public_prefix: "/public/".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_photo_key_layout() {
        assert_eq!(
            client().photo_key("citizen-1", "abc", "jpg"),
            "public/issues/citizen-1/abc.jpg"
        );
    }

    #[test]
    fn test_public_url_uses_public_endpoint() {
        assert_eq!(
            client().get_public_url("public/issues/citizen-1/abc.jpg"),
            "https://cdn.example.com/nagrik-seva-uploads/public/issues/citizen-1/abc.jpg"
        );
    }
}
