//! System orchestration, startup, and shutdown logic.

mod seed;
mod system;
mod tracing;

pub use self::system::*;
pub use self::tracing::*;
