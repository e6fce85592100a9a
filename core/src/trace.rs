//! Evaluation trace types for debugging `when` behavior.
//!
//! [`CaseList::evaluate_with_trace`] returns the same result as
//! [`CaseList::evaluate`] plus the path taken: which cases were inspected,
//! which one matched, and whether the default was used.
//!
//! # Example
//!
//! ```
//! use when::CaseList;
//!
//! let trace = CaseList::new()
//!     .value(1, || "one")
//!     .otherwise(|| "other")
//!     .evaluate_with_trace(&5);
//!
//! assert_eq!(trace.result, Some("other"));
//! assert!(trace.used_default);
//! for step in &trace.steps {
//!     println!("case[{}] {}: matched={}", step.index, step.kind, step.matched);
//! }
//! ```

use crate::{CandidateKind, CaseList};
use std::fmt;

/// Trace of a full [`CaseList`] evaluation.
///
/// # INV: `result` == `evaluate()` result
///
/// The `result` field always equals what [`CaseList::evaluate`] would
/// return for the same input, and the same single producer is run.
pub struct EvalTrace<R> {
    /// The final result (identical to what `evaluate()` returns).
    pub result: Option<R>,
    /// Every case inspected, in order.
    /// Stops after the first positive match (preserves first-match-wins).
    pub steps: Vec<EvalStep>,
    /// Index of the selected case, if any.
    pub selected: Option<usize>,
    /// Whether the selected case is a default.
    pub used_default: bool,
}

impl<R: fmt::Debug> fmt::Debug for EvalTrace<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvalTrace")
            .field("result", &self.result)
            .field("steps", &self.steps)
            .field("selected", &self.selected)
            .field("used_default", &self.used_default)
            .finish()
    }
}

/// One inspected case in a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalStep {
    /// Index in the case list (0-based).
    pub index: usize,
    /// Kind of the case's candidate.
    pub kind: CandidateKind,
    /// Did the candidate match positively? Always `false` for defaults.
    pub matched: bool,
}

impl<T: PartialEq, R> CaseList<'_, T, R> {
    /// Evaluate with full tracing.
    ///
    /// Same semantics as [`evaluate`](Self::evaluate): at most one producer
    /// runs, and candidates after a positive match are not tested.
    pub fn evaluate_with_trace(self, value: &T) -> EvalTrace<R> {
        let mut steps = Vec::new();
        let mut matched = None;
        let mut fallback = None;

        for (index, case) in self.iter().enumerate() {
            let hit = case.candidate.matches(value);
            steps.push(EvalStep {
                index,
                kind: case.candidate.kind(),
                matched: hit,
            });
            if hit {
                matched = Some(index);
                break;
            }
            if fallback.is_none() && case.is_default() {
                fallback = Some(index);
            }
        }

        let used_default = matched.is_none() && fallback.is_some();
        let selected = matched.or(fallback);
        let result = selected.and_then(|index| {
            self.into_cases()
                .into_iter()
                .nth(index)
                .map(|case| case.produce())
        });

        EvalTrace {
            result,
            steps,
            selected,
            used_default,
        }
    }
}
