//! Generic function composition.
//!
//! `compose!` composes right-to-left (`compose!(f, g)(x) == f(g(x))`);
//! `pipe!` composes left-to-right by reversing its arguments and delegating
//! to `compose!`.

/// A boxed endo-function, the element type of runtime composition lists.
pub type Endo<X> = Box<dyn Fn(X) -> X + Send + Sync>;

pub fn identity<T>(x: T) -> T {
    x
}

/// `compose2(g, f)(x) == g(f(x))`.
pub fn compose2<A, B, C, G, F>(g: G, f: F) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |x| g(f(x))
}

/// Compose a runtime list of endo-functions right-to-left.
///
/// The last function runs first. An empty list yields the identity.
pub fn compose_all<X: 'static>(fns: Vec<Endo<X>>) -> Endo<X> {
    Box::new(move |x| fns.iter().rev().fold(x, |acc, f| f(acc)))
}

/// Right-to-left composition of one or more unary functions.
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::compose2($f, $crate::compose!($($rest),+))
    };
}

/// Left-to-right composition of one or more unary functions.
#[macro_export]
macro_rules! pipe {
    (@rev [$($acc:expr),+]) => {
        $crate::compose!($($acc),+)
    };
    (@rev [$($acc:expr),*] $head:expr $(, $tail:expr)*) => {
        $crate::pipe!(@rev [$head $(, $acc)*] $($tail),*)
    };
    ($($f:expr),+ $(,)?) => {
        $crate::pipe!(@rev [] $($f),+)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_one(x: i32) -> i32 {
        x + 1
    }

    fn double(x: i32) -> i32 {
        x * 2
    }

    #[test]
    fn compose2_applies_right_first() {
        let f = compose2(double, add_one);
        // (3 + 1) * 2
        assert_eq!(f(3), 8);
    }

    #[test]
    fn compose_macro_is_right_to_left() {
        let f = crate::compose!(add_one, double, |x: i32| x - 10);
        // ((5 - 10) * 2) + 1
        assert_eq!(f(5), -9);
    }

    #[test]
    fn pipe_macro_is_left_to_right() {
        let f = crate::pipe!(add_one, double, |x: i32| x - 10);
        // ((5 + 1) * 2) - 10
        assert_eq!(f(5), 2);
    }

    #[test]
    fn pipe_changes_types_between_steps() {
        let f = crate::pipe!(|s: String| s.len(), |n: usize| n * 3, |n: usize| format!("<{n}>"));
        assert_eq!(f("abcd".to_string()), "<12>");
    }

    #[test]
    fn identity_is_a_unit_for_the_macros() {
        let left = crate::compose!(identity, double);
        let right = crate::pipe!(double, identity);
        let single = crate::pipe!(double);
        for x in [-4, 0, 9] {
            assert_eq!(left(x), double(x));
            assert_eq!(right(x), double(x));
            assert_eq!(single(x), double(x));
        }
    }

    #[test]
    fn compose_all_runs_last_function_first() {
        let fns: Vec<Endo<String>> = vec![
            Box::new(|s: String| s + "a") as Endo<String>,
            Box::new(|s: String| s + "b") as Endo<String>,
            Box::new(|s: String| s + "c") as Endo<String>,
        ];
        assert_eq!(compose_all(fns)(String::new()), "cba");
    }

    #[test]
    fn compose_all_empty_is_identity() {
        let f = compose_all::<i32>(Vec::new());
        assert_eq!(f(99), 99);
    }
}
