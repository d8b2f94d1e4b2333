//! Civic issue reporting, tracking and resolution.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Role | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/issues` | citizen | Report an issue |
//! | GET | `/api/issues/mine` | citizen | Own issues, newest first |
//! | GET | `/api/issues/{id}` | citizen (own) / worker | Issue with its update log |
//! | POST | `/api/issues/{id}/updates` | worker | Append a status update |
//! | PATCH | `/api/issues/{id}` | admin | Edit an issue |
//! | GET | `/api/issues` | admin | Filtered, paginated listing |
//! | GET | `/api/issues/queue` | worker | Unresolved issues, oldest first |
//! | GET | `/api/issues/stats` | public | Status counters |
//! | POST | `/api/issues/photos` | citizen | Upload a photo |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{IssueService, PhotoService};
