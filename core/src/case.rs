//! Case — candidate + deferred producer
//!
//! A `Case` binds a [`Candidate`] to the computation that yields the result
//! when the case is selected. The producer is an `FnOnce` thunk: it runs at
//! most once, and only if this case wins.

use crate::{Candidate, Guard};
use core::fmt;

/// Deferred computation yielding a case's result.
pub type Producer<'a, R> = Box<dyn FnOnce() -> R + 'a>;

/// One branch of a `when` expression.
///
/// # Type Parameters
///
/// - `'a`: Lifetime of anything the producer or guard borrows
/// - `T`: The scrutinee type
/// - `R`: The result type
///
/// # Example
///
/// ```
/// use when::Case;
///
/// let case = Case::value(1, || "one");
/// assert!(case.candidate.matches(&1));
/// assert_eq!(case.produce(), "one");
/// ```
pub struct Case<'a, T, R> {
    /// What the scrutinee is compared against.
    pub candidate: Candidate<'a, T>,

    producer: Producer<'a, R>,
}

impl<'a, T, R> Case<'a, T, R> {
    /// Create a case from any candidate form.
    pub fn new(candidate: impl Into<Candidate<'a, T>>, producer: impl FnOnce() -> R + 'a) -> Self {
        Self {
            candidate: candidate.into(),
            producer: Box::new(producer),
        }
    }

    /// Positive case: selected when the scrutinee equals `value`.
    pub fn value(value: T, producer: impl FnOnce() -> R + 'a) -> Self {
        Self::new(Candidate::Value(value), producer)
    }

    /// Positive case: selected when the scrutinee equals any of `values`.
    pub fn any_of(values: impl IntoIterator<Item = T>, producer: impl FnOnce() -> R + 'a) -> Self {
        Self::new(Candidate::AnyOf(values.into_iter().collect()), producer)
    }

    /// Positive case: selected when `predicate` holds for the scrutinee.
    pub fn guard(predicate: impl Fn(&T) -> bool + 'a, producer: impl FnOnce() -> R + 'a) -> Self {
        Self::new(Candidate::Guard(Guard::new(predicate)), producer)
    }

    /// Default case: selected when no positive case matched.
    pub fn otherwise(producer: impl FnOnce() -> R + 'a) -> Self {
        Self::new(Candidate::Default, producer)
    }

    /// Returns `true` if this is a default case.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.candidate.is_default()
    }

    /// Consume the case and run its producer.
    pub fn produce(self) -> R {
        (self.producer)()
    }
}

/// Associate a candidate with a producer.
///
/// Accepts `Some(value)` for a positive case, and either `None` or the
/// [`Else`](crate::Else) marker for the default case.
///
/// ```
/// use when::{associate, Candidate, Case, Else};
///
/// let positive = associate(Some('y'), || true);
/// let fallback: Case<'_, char, bool> = associate(Else, || false);
/// assert!(matches!(positive.candidate, Candidate::Value('y')));
/// assert!(fallback.is_default());
/// ```
pub fn associate<'a, T, R>(
    candidate: impl Into<Candidate<'a, T>>,
    producer: impl FnOnce() -> R + 'a,
) -> Case<'a, T, R> {
    Case::new(candidate, producer)
}

impl<T: fmt::Debug, R> fmt::Debug for Case<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("candidate", &self.candidate)
            .finish_non_exhaustive()
    }
}
