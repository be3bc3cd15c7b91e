//! In-memory JSON API over five entity collections (users, products, posts,
//! todos, categories). Each collection is owned by a single actor; HTTP
//! handlers only ever talk to cloneable clients.

pub mod actor_framework;
pub mod api;
pub mod app_system;
pub mod category_actor;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod post_actor;
pub mod product_actor;
pub mod query;
pub mod todo_actor;
pub mod user_actor;
pub mod validation;

#[cfg(test)]
mod mock_framework;
