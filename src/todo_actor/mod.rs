//! Todo items and their completion state.

mod actions;
pub mod dtos;
pub mod entity;

pub use actions::*;
pub use dtos::*;
