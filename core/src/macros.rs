//! `when!` — concise syntax for a `when` expression
//!
//! Each arm is expanded to a guard over the scrutinee plus a producer
//! closure. Candidate expressions are only evaluated when their arm is
//! tested, and arm bodies only when their arm is selected.
//!
//! Because arm bodies are closures:
//!
//! - `return` and `?` inside an arm apply to the closure, not to the
//!   enclosing function.
//! - Two arms cannot both move the same local. `1 => s, else => s` is
//!   rejected by the borrow checker, where a native `match` accepts it:
//!
//! ```compile_fail
//! use when::when;
//!
//! let s = String::from("moved");
//! let r: String = when!(1; 1 => s, else => s);
//! ```

use crate::Case;

/// Build one `when!` arm. The scrutinee only fixes `T` for the predicate.
#[doc(hidden)]
pub fn __when_arm<'a, T, R>(
    _scrutinee: &T,
    predicate: impl Fn(&T) -> bool + 'a,
    producer: impl FnOnce() -> R + 'a,
) -> Case<'a, T, R> {
    Case::guard(predicate, producer)
}

/// Evaluate a Kotlin-style `when` expression.
///
/// Arms are tried in order (first match wins). Candidates of arms after the
/// selected one are never evaluated.
///
/// Arm forms:
///
/// - `value => result` — equality with the scrutinee
/// - `a, b, c => result` — equality with any of the values
/// - `in range => result` — `range.contains(&scrutinee)`
/// - `if predicate => result` — `predicate(&scrutinee)` holds
/// - `else => result` — default, taken only if no other arm matched
///
/// # Panics
///
/// Panics if no arm matched and there is no `else` arm, like [`when()`](crate::when()).
///
/// # Example
///
/// ```
/// use when::when;
///
/// let size = |n: u32| when!(n;
///     0 => "none",
///     1, 2 => "couple",
///     in 3..=9 => "several",
///     if |v: &u32| v % 100 == 0 => "round",
///     else => "many",
/// );
///
/// assert_eq!(size(0), "none");
/// assert_eq!(size(2), "couple");
/// assert_eq!(size(7), "several");
/// assert_eq!(size(300), "round");
/// assert_eq!(size(42), "many");
/// ```
#[macro_export]
macro_rules! when {
    ($value:expr; $($arms:tt)*) => {
        match &$value {
            scrutinee => $crate::when(
                scrutinee,
                $crate::__when_cases!(@acc scrutinee [] $($arms)*),
            ),
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __when_cases {
    (@acc $s:ident [$($case:expr,)*]) => {
        $crate::CaseList::from(::std::vec![$($case,)*])
    };
    (@acc $s:ident [$($case:expr,)*] else => $result:expr $(, $($rest:tt)*)?) => {
        $crate::__when_cases!(
            @acc $s [$($case,)* $crate::Case::otherwise(|| $result),] $($($rest)*)?
        )
    };
    (@acc $s:ident [$($case:expr,)*] in $range:expr => $result:expr $(, $($rest:tt)*)?) => {
        $crate::__when_cases!(
            @acc $s [$($case,)* $crate::__when_arm($s, |v| ($range).contains(v), || $result),]
            $($($rest)*)?
        )
    };
    (@acc $s:ident [$($case:expr,)*] if $guard:expr => $result:expr $(, $($rest:tt)*)?) => {
        $crate::__when_cases!(
            @acc $s [$($case,)* $crate::__when_arm($s, $guard, || $result),] $($($rest)*)?
        )
    };
    (@acc $s:ident [$($case:expr,)*] $value:expr => $result:expr $(, $($rest:tt)*)?) => {
        $crate::__when_cases!(
            @acc $s [$($case,)* $crate::__when_arm($s, |v| *v == $value, || $result),]
            $($($rest)*)?
        )
    };
    (@acc $s:ident [$($case:expr,)*] $($value:expr),+ => $result:expr $(, $($rest:tt)*)?) => {
        $crate::__when_cases!(
            @acc $s [$($case,)* $crate::__when_arm($s, |v| $(*v == $value)||+, || $result),]
            $($($rest)*)?
        )
    };
}
