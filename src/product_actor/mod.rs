//! Product catalogue records.

pub mod dtos;
pub mod entity;

pub use dtos::*;
