mod helpline_dto;

pub use helpline_dto::*;
