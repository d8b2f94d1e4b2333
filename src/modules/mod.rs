//! Adapters for infrastructure outside the database (object storage).

pub mod storage;
