pub mod chain;
pub mod compose;
pub mod error;
pub mod task;
pub mod value;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::chain::{Chain, Identity, chain_with};
    pub use crate::compose::{Endo, compose_all, compose2, identity};
    pub use crate::error::{KleisliError, Result};
    pub use crate::task::{Task, chain_task, chain_task_with, fail, ready, task_fn};
    pub use crate::value::chain_value;
    pub use crate::{compose, pipe};
}
