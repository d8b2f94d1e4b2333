pub mod issue_handler;
pub mod photo_handler;
