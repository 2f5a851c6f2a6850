pub mod dynamic;
pub mod kleisli;
pub mod pipeline;

#[doc(hidden)]
pub use kleisli_core as __core;

pub mod prelude {
    pub use crate::dynamic::{ValueFn, ValueStep, pipe_k_values, value_step};
    pub use crate::kleisli::{compose_k_all, pipe_k_all};
    pub use crate::pipeline::{TaskPipeline, TaskStep};
    pub use crate::{compose_k, compose_k_async, pipe_k, pipe_k_async};
}
