//! Citizen profiles recorded at sign-in.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/users/me/session` | Record a sign-in and upsert the profile |
//! | GET | `/api/users/me` | Get the stored profile |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
