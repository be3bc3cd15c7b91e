//! Business domain entities. Pure data with no actor-specific concerns.

pub mod category;
pub mod post;
pub mod product;
pub mod todo;
pub mod user;

pub use category::*;
pub use post::*;
pub use product::*;
pub use todo::*;
pub use user::*;
