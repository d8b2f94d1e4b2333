mod issue_service;
mod photo_service;

pub use issue_service::{count_by_status, IssueService};
pub use photo_service::PhotoService;
