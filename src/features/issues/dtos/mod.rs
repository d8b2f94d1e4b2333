mod issue_dto;
mod photo_dto;

pub use issue_dto::*;
pub use photo_dto::*;
