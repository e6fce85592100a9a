//! Candidate — what a case compares the scrutinee against
//!
//! A candidate is either positive (a value, a set of values, or a guard) or
//! the default. Positive candidates are tested in declaration order; the
//! default is only taken when no positive candidate matched.

use core::fmt;

/// Predicate used by [`Candidate::Guard`].
///
/// Borrowed state is allowed through the `'a` lifetime, so guards can close
/// over locals of the calling scope.
pub struct Guard<'a, T> {
    predicate: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T> Guard<'a, T> {
    /// Wrap a predicate.
    pub fn new(predicate: impl Fn(&T) -> bool + 'a) -> Self {
        Self {
            predicate: Box::new(predicate),
        }
    }

    /// Run the predicate against the scrutinee.
    #[must_use]
    pub fn test(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> fmt::Debug for Guard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(<fn>)")
    }
}

/// The left-hand side of a case.
///
/// # INV: Default never matches positively
///
/// [`Candidate::matches`] returns `false` for [`Candidate::Default`]. The
/// default is a fallback resolved by the case list, not a wildcard that
/// shadows later positive cases.
pub enum Candidate<'a, T> {
    /// Matches when equal to the scrutinee.
    Value(T),
    /// Matches when any of the values equals the scrutinee.
    AnyOf(Vec<T>),
    /// Matches when the predicate holds for the scrutinee.
    Guard(Guard<'a, T>),
    /// Fallback case, taken only when no positive candidate matched.
    Default,
}

impl<T: PartialEq> Candidate<'_, T> {
    /// Does this candidate positively match `value`?
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::Value(v) => v == value,
            Self::AnyOf(values) => values.iter().any(|v| v == value),
            Self::Guard(guard) => guard.test(value),
            Self::Default => false,
        }
    }
}

impl<T> Candidate<'_, T> {
    /// Returns `true` for [`Candidate::Default`].
    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// The kind of this candidate, without its payload.
    #[must_use]
    pub fn kind(&self) -> CandidateKind {
        match self {
            Self::Value(_) => CandidateKind::Value,
            Self::AnyOf(_) => CandidateKind::AnyOf,
            Self::Guard(_) => CandidateKind::Guard,
            Self::Default => CandidateKind::Default,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Candidate<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::AnyOf(values) => f.debug_tuple("AnyOf").field(values).finish(),
            Self::Guard(guard) => fmt::Debug::fmt(guard, f),
            Self::Default => f.write_str("Default"),
        }
    }
}

/// `Some(v)` is a value candidate, `None` the default.
impl<T> From<Option<T>> for Candidate<'_, T> {
    fn from(candidate: Option<T>) -> Self {
        candidate.map_or(Self::Default, Self::Value)
    }
}

/// Marker standing in for a candidate value to declare the default case.
///
/// ```
/// use when::{associate, cases, when, Else};
///
/// let list = cases([
///     associate(Some(1), || "one"),
///     associate(Else, || "other"),
/// ]);
/// assert_eq!(when(&7, list), "other");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Else;

impl<T> From<Else> for Candidate<'_, T> {
    fn from(_: Else) -> Self {
        Self::Default
    }
}

/// Candidate kind, as recorded in traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// [`Candidate::Value`]
    Value,
    /// [`Candidate::AnyOf`]
    AnyOf,
    /// [`Candidate::Guard`]
    Guard,
    /// [`Candidate::Default`]
    Default,
}

impl fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Value => "value",
            Self::AnyOf => "any_of",
            Self::Guard => "guard",
            Self::Default => "default",
        })
    }
}
