use serde_json::Value;

use kleisli_core::error::{KleisliError, Result};
use kleisli_core::value::{chain_value, kind_of};

/// A step over dynamically-typed values.
pub type ValueStep = Box<dyn Fn(Value) -> Result<Value> + Send + Sync>;

/// A composed function over dynamically-typed values.
pub type ValueFn = Box<dyn Fn(Value) -> Result<Value> + Send + Sync>;

/// Left-to-right Kleisli composition over JSON values.
///
/// Each step is applied through [`chain_value`], so the incoming value and
/// every intermediate value must be an array. Failures are fail-fast and
/// carry the index of the step whose chain failed. An empty step list is
/// rejected with [`KleisliError::EmptyComposition`].
pub fn pipe_k_values(steps: Vec<ValueStep>) -> Result<ValueFn> {
    if steps.is_empty() {
        return Err(KleisliError::EmptyComposition);
    }
    Ok(Box::new(move |initial| {
        steps
            .iter()
            .enumerate()
            .try_fold(initial, |m, (index, step)| {
                tracing::trace!(step = index, kind = kind_of(&m), "chaining value");
                chain_value(m, step).map_err(|e| {
                    tracing::debug!(step = index, error = %e, "value pipeline step failed");
                    KleisliError::at_step(index, e)
                })
            })
    }))
}

/// Wrap a closure as a [`ValueStep`].
pub fn value_step<F>(f: F) -> ValueStep
where
    F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
{
    Box::new(f)
}
