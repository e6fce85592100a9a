//! Matcher — first-match-wins selection over a [`CaseList`]
//!
//! Selection scans the cases once, in order. The first positive match is
//! taken immediately; otherwise the first default seen during the scan is
//! the fallback. Only the selected producer runs.

use crate::{CaseList, WhenError};

/// Outcome of scanning a case list, before any producer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Selection {
    /// A positive candidate matched at this index.
    Matched(usize),
    /// Nothing matched; the first default sits at this index.
    Fallback(usize),
    /// Nothing matched and there is no default.
    Exhausted,
}

impl Selection {
    pub(crate) fn index(self) -> Option<usize> {
        match self {
            Self::Matched(index) | Self::Fallback(index) => Some(index),
            Self::Exhausted => None,
        }
    }
}

impl<T: PartialEq, R> CaseList<'_, T, R> {
    pub(crate) fn resolve(&self, value: &T) -> Selection {
        let mut fallback = None;
        for (index, case) in self.iter().enumerate() {
            // First-match-wins: later candidates (and guards) are never tested
            if case.candidate.matches(value) {
                return Selection::Matched(index);
            }
            if fallback.is_none() && case.is_default() {
                fallback = Some(index);
            }
        }
        fallback.map_or(Selection::Exhausted, Selection::Fallback)
    }

    /// Index of the case that would be selected for `value`.
    ///
    /// Tests candidates (guards included) but never runs a producer.
    pub fn select(&self, value: &T) -> Option<usize> {
        self.resolve(value).index()
    }

    /// Evaluate the case list against `value`.
    ///
    /// Returns the result of the first positively matching case, or of the
    /// first default if nothing matched. `None` means no case matched and no
    /// default was supplied.
    ///
    /// # Guarantees
    ///
    /// At most one producer runs. Producers of unselected cases never run.
    pub fn evaluate(self, value: &T) -> Option<R> {
        let selection = self.resolve(value);
        match selection {
            Selection::Matched(index) => tracing::trace!(index, "case matched"),
            Selection::Fallback(index) => {
                tracing::debug!(index, cases = self.len(), "no case matched, using default");
            }
            Selection::Exhausted => return None,
        }
        let index = selection.index()?;
        self.into_cases().into_iter().nth(index).map(|case| case.produce())
    }
}

/// Evaluate a `when` expression.
///
/// Selects the first case equal to `value`, falling back to the first
/// default case.
///
/// # Panics
///
/// Panics when no case matched and no default was supplied. A missing
/// default is a non-exhaustive `when`, a bug at the call site rather than a
/// runtime condition. Use [`try_when`] where a missing match is expected.
///
/// # Example
///
/// ```
/// use when::{when, Case};
///
/// let name = when(&2, vec![
///     Case::value(1, || "one"),
///     Case::value(2, || "two"),
///     Case::otherwise(|| "unknown"),
/// ]);
/// assert_eq!(name, "two");
/// ```
#[track_caller]
pub fn when<'a, T: PartialEq, R>(value: &T, cases: impl Into<CaseList<'a, T, R>>) -> R {
    let cases = cases.into();
    let count = cases.len();
    match cases.evaluate(value) {
        Some(result) => result,
        None => {
            tracing::error!(cases = count, "non-exhaustive when");
            panic!("{}", WhenError::NoMatch { cases: count });
        }
    }
}

/// Evaluate a `when` expression, reporting a missing match as an error.
///
/// # Errors
///
/// Returns [`WhenError::NoMatch`] when no case matched and no default was
/// supplied.
pub fn try_when<'a, T: PartialEq, R>(
    value: &T,
    cases: impl Into<CaseList<'a, T, R>>,
) -> Result<R, WhenError> {
    let cases = cases.into();
    let count = cases.len();
    cases
        .evaluate(value)
        .ok_or(WhenError::NoMatch { cases: count })
}
