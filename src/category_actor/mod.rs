pub mod dtos;
pub mod entity;

pub use dtos::*;
