//! Blog posts, their counters and comment threads.

mod actions;
pub mod dtos;
pub mod entity;

pub use actions::*;
pub use dtos::*;
