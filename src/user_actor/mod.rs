//! User records: validation, uniqueness of email and username, credentials.

pub mod dtos;
pub mod entity;

pub use dtos::*;
