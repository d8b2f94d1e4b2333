//! Static catalogue of Delhi civic helplines.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/api/helplines` | No | All helplines |
//! | GET | `/api/helplines/{category}` | No | Helpline for a category label or alias |

pub mod catalogue;
pub mod dtos;
pub mod handlers;
pub mod routes;
