//! Kleisli composition of functions returning chainable values.
//!
//! `pipe_k!(f, g, h)` builds a function equivalent to
//! `|m| m.chain(f).chain(g).chain(h)`. Every function is lifted with
//! [`chain_with`], the lifted list is reversed, and the result is handed to
//! the right-to-left composer. At least one function is required: the macros
//! reject an empty argument list at compile time and the runtime forms return
//! [`KleisliError::EmptyComposition`].

use kleisli_core::chain::{Chain, chain_with};
use kleisli_core::compose::{Endo, compose_all};
use kleisli_core::error::{KleisliError, Result};

/// Left-to-right Kleisli composition of one or more functions.
///
/// Each step may change the item type, as long as every function returns the
/// same kind of chainable.
///
/// ```
/// use kleisli_chain::pipe_k;
///
/// let f = pipe_k!(|x: i32| Some(x + 1), |x: i32| Some(x * 2));
/// assert_eq!(f(Some(3)), Some(8));
/// assert_eq!(f(None), None);
/// ```
///
/// ```compile_fail
/// let f = kleisli_chain::pipe_k!();
/// ```
#[macro_export]
macro_rules! pipe_k {
    (@rev [$($acc:expr),+]) => {
        $crate::__core::compose!($($acc),+)
    };
    (@rev [$($acc:expr),*] $head:expr $(, $tail:expr)*) => {
        $crate::pipe_k!(@rev [$head $(, $acc)*] $($tail),*)
    };
    ($($f:expr),+ $(,)?) => {
        $crate::pipe_k!(@rev [] $($crate::__core::chain::chain_with($f)),+)
    };
}

/// Right-to-left Kleisli composition: `compose_k!(h, g, f) == pipe_k!(f, g, h)`.
///
/// ```compile_fail
/// let f = kleisli_chain::compose_k!();
/// ```
#[macro_export]
macro_rules! compose_k {
    ($($f:expr),+ $(,)?) => {
        $crate::__core::compose!($($crate::__core::chain::chain_with($f)),+)
    };
}

/// Left-to-right Kleisli composition of task-returning functions.
///
/// Same shape as [`pipe_k!`], with each function lifted by
/// [`chain_task_with`](kleisli_core::task::chain_task_with). The composed
/// function takes a task and returns a task; nothing runs until it is awaited.
///
/// ```
/// use kleisli_chain::pipe_k_async;
/// use kleisli_core::task::ready;
///
/// let f = pipe_k_async!(|x: i32| ready(x + 1), |x: i32| ready(x.to_string()));
/// let out = futures::executor::block_on(f(ready(41)));
/// assert_eq!(out.unwrap(), "42");
/// ```
#[macro_export]
macro_rules! pipe_k_async {
    ($($f:expr),+ $(,)?) => {
        $crate::pipe_k!(@rev [] $($crate::__core::task::chain_task_with($f)),+)
    };
}

/// Right-to-left counterpart of [`pipe_k_async!`].
#[macro_export]
macro_rules! compose_k_async {
    ($($f:expr),+ $(,)?) => {
        $crate::__core::compose!($($crate::__core::task::chain_task_with($f)),+)
    };
}

/// Left-to-right Kleisli composition of a runtime list of functions.
///
/// All functions share one item type `T`, so the list can be of any length
/// decided at runtime.
pub fn pipe_k_all<T, M, F, I>(fs: I) -> Result<Endo<M>>
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> M + Send + Sync + 'static,
    M: Chain<Item = T, Bind<T> = M> + 'static,
    T: 'static,
{
    let mut lifted = lift_all(fs)?;
    lifted.reverse();
    Ok(compose_all(lifted))
}

/// Right-to-left Kleisli composition of a runtime list of functions.
pub fn compose_k_all<T, M, F, I>(fs: I) -> Result<Endo<M>>
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> M + Send + Sync + 'static,
    M: Chain<Item = T, Bind<T> = M> + 'static,
    T: 'static,
{
    Ok(compose_all(lift_all(fs)?))
}

fn lift_all<T, M, F, I>(fs: I) -> Result<Vec<Endo<M>>>
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> M + Send + Sync + 'static,
    M: Chain<Item = T, Bind<T> = M> + 'static,
    T: 'static,
{
    let lifted: Vec<Endo<M>> = fs
        .into_iter()
        .map(|f| Box::new(chain_with(f)) as Endo<M>)
        .collect();
    if lifted.is_empty() {
        return Err(KleisliError::EmptyComposition);
    }
    Ok(lifted)
}
