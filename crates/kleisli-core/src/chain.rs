/// A container whose contents can be sequenced with a dependent computation.
///
/// `chain` applies `f` to the contained value(s) and flattens the nested
/// result back into the same kind of container. Short-circuiting variants
/// (`None`, `Err`, an empty `Vec`) never call `f`.
///
/// `Bind<U>` names "this container, holding `U` instead of `Item`".
pub trait Chain: Sized {
    type Item;
    type Bind<U>: Chain<Item = U>;

    fn chain<U, F>(self, f: F) -> Self::Bind<U>
    where
        F: FnMut(Self::Item) -> Self::Bind<U>;
}

/// Partially apply `f` to the chain dispatcher, producing `m -> m.chain(f)`.
///
/// The accepted container type is derived from what `f` returns, so for
/// `f: A -> M<B>` the result is a function `M<A> -> M<B>`.
pub fn chain_with<A, MB, F>(f: F) -> impl Fn(MB::Bind<A>) -> MB
where
    MB: Chain,
    MB::Bind<A>: Chain<Item = A, Bind<MB::Item> = MB>,
    F: Fn(A) -> MB,
{
    move |m: MB::Bind<A>| m.chain::<MB::Item, _>(&f)
}

impl<T> Chain for Option<T> {
    type Item = T;
    type Bind<U> = Option<U>;

    fn chain<U, F>(self, f: F) -> Self::Bind<U>
    where
        F: FnMut(Self::Item) -> Self::Bind<U>,
    {
        self.and_then(f)
    }
}

impl<T, E> Chain for Result<T, E> {
    type Item = T;
    type Bind<U> = Result<U, E>;

    fn chain<U, F>(self, f: F) -> Self::Bind<U>
    where
        F: FnMut(Self::Item) -> Self::Bind<U>,
    {
        self.and_then(f)
    }
}

impl<T> Chain for Vec<T> {
    type Item = T;
    type Bind<U> = Vec<U>;

    fn chain<U, F>(self, f: F) -> Self::Bind<U>
    where
        F: FnMut(Self::Item) -> Self::Bind<U>,
    {
        self.into_iter().flat_map(f).collect()
    }
}

/// The trivial chainable: always holds exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Identity<T>(pub T);

impl<T> Identity<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Chain for Identity<T> {
    type Item = T;
    type Bind<U> = Identity<U>;

    fn chain<U, F>(self, mut f: F) -> Self::Bind<U>
    where
        F: FnMut(Self::Item) -> Self::Bind<U>,
    {
        f(self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn option_chain_some() {
        assert_eq!(Some(3).chain(|x| Some(x + 1)), Some(4));
    }

    #[test]
    fn option_chain_none_skips_function() {
        let calls = Cell::new(0);
        let result = None::<i32>.chain(|x| {
            calls.set(calls.get() + 1);
            Some(x)
        });
        assert_eq!(result, None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn result_chain_keeps_first_error() {
        let r: Result<i32, String> = Err("first".into());
        let out = r.chain(|_| Err::<i32, String>("second".into()));
        assert_eq!(out, Err("first".to_string()));
    }

    #[test]
    fn result_chain_changes_item_type() {
        let r: Result<i32, String> = Ok(7);
        assert_eq!(r.chain(|x| Ok(x.to_string())), Ok("7".to_string()));
    }

    #[test]
    fn vec_chain_flat_maps_in_order() {
        let out = vec![1, 2, 3].chain(|x| vec![x; x as usize]);
        assert_eq!(out, vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn vec_chain_empty_results_drop_elements() {
        let out = vec![1, 2, 3, 4].chain(|x| if x % 2 == 0 { vec![x] } else { vec![] });
        assert_eq!(out, vec![2, 4]);
    }

    #[test]
    fn identity_chain_applies_once() {
        assert_eq!(Identity(5).chain(|x| Identity(x * 3)).into_inner(), 15);
    }

    #[test]
    fn chain_with_lifts_function() {
        let lifted = chain_with(|x: i32| Some(x * 2));
        assert_eq!(lifted(Some(21)), Some(42));
        assert_eq!(lifted(None), None);
    }

    #[test]
    fn chain_with_is_reusable_on_vec() {
        let dup = chain_with(|x: char| vec![x, x]);
        assert_eq!(dup(vec!['a', 'b']), vec!['a', 'a', 'b', 'b']);
        assert_eq!(dup(vec!['z']), vec!['z', 'z']);
    }
}
