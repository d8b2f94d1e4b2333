pub mod area_overview;
pub mod auth;
pub mod geocoding;
pub mod helplines;
pub mod issues;
pub mod users;
