//! Typed handles over the generic `ResourceClient`s. Cross-entity rules
//! (a post needs a real author, a todo a real category) are checked here,
//! before the owning actor is asked to store anything.

#[macro_use]
mod macros;

mod category_client;
mod post_client;
mod product_client;
mod todo_client;
mod user_client;

pub use category_client::CategoryClient;
pub use post_client::PostClient;
pub use product_client::ProductClient;
pub use todo_client::TodoClient;
pub use user_client::UserClient;

use crate::error::StoreError;

/// A missing referenced record is the caller's input problem, not a 404 on the
/// resource being written.
fn reference_error(field: &str, id: &str, err: StoreError) -> StoreError {
    match err {
        StoreError::NotFound { kind, .. } => {
            StoreError::validation(format!("{field} '{id}' does not match any {kind}"))
        }
        other => other,
    }
}
