use std::sync::Arc;

use tracing::{Instrument, debug, info_span};
use uuid::Uuid;

use kleisli_core::compose::{Endo, compose_all};
use kleisli_core::error::{KleisliError, Result};
use kleisli_core::task::{Task, chain_task_with, ready};

/// A shared task-returning step from `T` to `T`.
pub type TaskStep<T> = Arc<dyn Fn(T) -> Task<T> + Send + Sync>;

/// Left-to-right Kleisli composition of a runtime list of async steps.
///
/// Steps run in insertion order; the first failure stops the pipeline and is
/// reported as [`KleisliError::Step`] with the failing step's index.
pub struct TaskPipeline<T> {
    steps: Vec<TaskStep<T>>,
}

impl<T: Send + 'static> TaskPipeline<T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step to the end of the pipeline.
    pub fn step<F>(mut self, f: F) -> Self
    where
        F: Fn(T) -> Task<T> + Send + Sync + 'static,
    {
        self.steps.push(Arc::new(f));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Compose the steps into a single task-to-task function.
    ///
    /// Each step is lifted with [`chain_task_with`], the lifted list is
    /// reversed and folded right-to-left. Fails with
    /// [`KleisliError::EmptyComposition`] when no step was added.
    pub fn build(&self) -> Result<Endo<Task<T>>> {
        if self.steps.is_empty() {
            return Err(KleisliError::EmptyComposition);
        }
        let mut lifted: Vec<Endo<Task<T>>> = self
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                Box::new(chain_task_with(indexed(index, Arc::clone(step)))) as Endo<Task<T>>
            })
            .collect();
        lifted.reverse();
        Ok(compose_all(lifted))
    }

    /// Run the pipeline on `input` under a fresh run id.
    pub async fn run(&self, input: T) -> Result<T> {
        self.run_with_id(input, Uuid::new_v4()).await
    }

    /// Run the pipeline on `input`; every step is logged inside a
    /// `task_pipeline` span carrying `run_id`.
    pub async fn run_with_id(&self, input: T, run_id: Uuid) -> Result<T> {
        let composed = self.build()?;
        let span = info_span!("task_pipeline", %run_id, steps = self.steps.len());
        composed(ready(input)).instrument(span).await
    }
}

/// Wrap `step` so its failure is reported as [`KleisliError::Step`].
fn indexed<T>(index: usize, step: TaskStep<T>) -> impl Fn(T) -> Task<T> + Send + Sync + 'static
where
    T: Send + 'static,
{
    move |value: T| -> Task<T> {
        debug!(step = index, "Running pipeline step");
        let pending = (*step)(value);
        Box::pin(async move {
            pending.await.map_err(|e| {
                debug!(step = index, error = %e, "Pipeline step failed");
                KleisliError::at_step(index, e)
            })
        })
    }
}

impl<T: Send + 'static> Default for TaskPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> FromIterator<TaskStep<T>> for TaskPipeline<T> {
    fn from_iter<I: IntoIterator<Item = TaskStep<T>>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}
