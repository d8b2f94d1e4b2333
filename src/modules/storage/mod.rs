//! Storage module for issue photos
//!
//! Provides the MinIO/S3-compatible storage client.

mod minio_client;

pub use minio_client::MinIOClient;
