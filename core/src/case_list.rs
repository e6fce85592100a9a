//! `CaseList` — ordered cases of one `when` expression
//!
//! Declaration order is significant: the first positive match wins, and the
//! first default is the fallback. A list is built fresh for each evaluation
//! and consumed by it.

use crate::{Candidate, Case};
use core::fmt;

/// Ordered list of cases.
///
/// # INV (Dijkstra): First-match-wins
///
/// Cases are tested in order. The first positive match terminates the scan,
/// even if later cases would also match. Among several defaults only the
/// first is ever selected.
///
/// # Example
///
/// ```
/// use when::{when, CaseList};
///
/// let list = CaseList::new()
///     .value(1, || "one")
///     .any_of([2, 3], || "few")
///     .otherwise(|| "many");
///
/// assert_eq!(when(&3, list), "few");
/// ```
pub struct CaseList<'a, T, R> {
    cases: Vec<Case<'a, T, R>>,
}

impl<'a, T, R> CaseList<'a, T, R> {
    /// Create an empty case list.
    #[must_use]
    pub fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Append a case.
    pub fn push(&mut self, case: Case<'a, T, R>) {
        self.cases.push(case);
    }

    /// Append a case (builder pattern).
    #[must_use]
    pub fn case(mut self, case: Case<'a, T, R>) -> Self {
        self.push(case);
        self
    }

    /// Append a value case (builder pattern).
    #[must_use]
    pub fn value(self, value: T, producer: impl FnOnce() -> R + 'a) -> Self {
        self.case(Case::value(value, producer))
    }

    /// Append an any-of case (builder pattern).
    #[must_use]
    pub fn any_of(
        self,
        values: impl IntoIterator<Item = T>,
        producer: impl FnOnce() -> R + 'a,
    ) -> Self {
        self.case(Case::any_of(values, producer))
    }

    /// Append a guard case (builder pattern).
    #[must_use]
    pub fn guard(
        self,
        predicate: impl Fn(&T) -> bool + 'a,
        producer: impl FnOnce() -> R + 'a,
    ) -> Self {
        self.case(Case::guard(predicate, producer))
    }

    /// Append a default case (builder pattern).
    #[must_use]
    pub fn otherwise(self, producer: impl FnOnce() -> R + 'a) -> Self {
        self.case(Case::otherwise(producer))
    }

    /// Returns the number of cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns `true` if there are no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Returns `true` if at least one default case is present.
    pub fn has_default(&self) -> bool {
        self.cases.iter().any(Case::is_default)
    }

    /// Iterate over the cases in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Case<'a, T, R>> {
        self.cases.iter()
    }

    pub(crate) fn into_cases(self) -> Vec<Case<'a, T, R>> {
        self.cases
    }
}

impl<T: PartialEq, R> CaseList<'_, T, R> {
    /// Indices of cases that can never be selected, in ascending order.
    ///
    /// Reported:
    /// - every default after the first one
    /// - every value or any-of case whose values were all declared by earlier
    ///   value or any-of cases (an empty any-of included)
    ///
    /// Guards are opaque and never reported, nor do they shadow later cases.
    pub fn unreachable(&self) -> Vec<usize> {
        let mut seen: Vec<&T> = Vec::new();
        let mut has_default = false;
        let mut dead = Vec::new();

        for (index, case) in self.cases.iter().enumerate() {
            let values: &[T] = match &case.candidate {
                Candidate::Value(v) => core::slice::from_ref(v),
                Candidate::AnyOf(values) => values.as_slice(),
                Candidate::Guard(_) => continue,
                Candidate::Default => {
                    if has_default {
                        dead.push(index);
                    }
                    has_default = true;
                    continue;
                }
            };

            if values.iter().all(|v| seen.contains(&v)) {
                dead.push(index);
            } else {
                seen.extend(values);
            }
        }

        dead
    }
}

impl<T, R> Default for CaseList<'_, T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, R> From<Vec<Case<'a, T, R>>> for CaseList<'a, T, R> {
    fn from(cases: Vec<Case<'a, T, R>>) -> Self {
        Self { cases }
    }
}

impl<'a, T, R, const N: usize> From<[Case<'a, T, R>; N]> for CaseList<'a, T, R> {
    fn from(cases: [Case<'a, T, R>; N]) -> Self {
        Self {
            cases: cases.into(),
        }
    }
}

impl<'a, T, R> FromIterator<Case<'a, T, R>> for CaseList<'a, T, R> {
    fn from_iter<I: IntoIterator<Item = Case<'a, T, R>>>(iter: I) -> Self {
        Self {
            cases: iter.into_iter().collect(),
        }
    }
}

impl<'a, T, R> Extend<Case<'a, T, R>> for CaseList<'a, T, R> {
    fn extend<I: IntoIterator<Item = Case<'a, T, R>>>(&mut self, iter: I) {
        self.cases.extend(iter);
    }
}

/// Collect cases, in declaration order, into a [`CaseList`].
pub fn cases<'a, T, R>(cases: impl IntoIterator<Item = Case<'a, T, R>>) -> CaseList<'a, T, R> {
    cases.into_iter().collect()
}

impl<T: fmt::Debug, R> fmt::Debug for CaseList<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.cases).finish()
    }
}
