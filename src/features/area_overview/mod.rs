//! Area-level summary of reported issues for the public overview page.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/area-overview` | No | Window-filtered counts, area tiles, map markers |

pub mod aggregator;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::AreaOverviewService;
