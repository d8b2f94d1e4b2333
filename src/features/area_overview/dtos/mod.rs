mod overview_dto;

pub use overview_dto::*;
