//! The async-result chainable.
//!
//! A [`Task`] is a boxed future resolving to [`Result`]. Chaining a task awaits
//! it and, only on success, hands the value to the next function; an error
//! resolves the whole chain without running anything after it.

use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::error::{KleisliError, Result};

pub type Task<T> = BoxFuture<'static, Result<T>>;

/// A task that resolves to `value`.
pub fn ready<T: Send + 'static>(value: T) -> Task<T> {
    Box::pin(futures::future::ready(Ok(value)))
}

/// A task that resolves to `err`.
pub fn fail<T: Send + 'static>(err: KleisliError) -> Task<T> {
    Box::pin(futures::future::ready(Err(err)))
}

/// Sequence `f` after `m`.
pub fn chain_task<T, U, F>(m: Task<T>, f: F) -> Task<U>
where
    T: Send + 'static,
    U: Send + 'static,
    F: FnOnce(T) -> Task<U> + Send + 'static,
{
    Box::pin(async move {
        let value = m.await?;
        f(value).await
    })
}

/// Partially apply `f` to [`chain_task`], producing `m -> chain_task(m, f)`.
///
/// The async counterpart of [`chain_with`](crate::chain::chain_with); the
/// returned function can be called any number of times.
pub fn chain_task_with<T, U, F>(f: F) -> impl Fn(Task<T>) -> Task<U> + Send + Sync + 'static
where
    T: Send + 'static,
    U: Send + 'static,
    F: Fn(T) -> Task<U> + Send + Sync + 'static,
{
    let f = Arc::new(f);
    move |m: Task<T>| {
        let f = Arc::clone(&f);
        chain_task(m, move |value| (*f)(value))
    }
}

/// Turn an async function into a task-returning one.
pub fn task_fn<T, U, F, Fut>(f: F) -> impl Fn(T) -> Task<U> + Send + Sync + 'static
where
    T: 'static,
    U: 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<U>> + Send + 'static,
{
    move |value: T| -> Task<U> { Box::pin(f(value)) }
}
