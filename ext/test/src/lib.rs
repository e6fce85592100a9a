//! when-test: Test helpers and conformance fixtures
//!
//! Provides a [`Recorder`] that logs which producers ran, and a way to build
//! a recorded case list from a [`WhenConfig`], so tests can assert that at
//! most one producer runs per evaluation.
//!
//! # Example
//!
//! ```
//! use when_test::prelude::*;
//!
//! let config: WhenConfig<i64, String> = WhenConfig::from_json(
//!     r#"{ "cases": [{ "type": "value", "value": 1, "then": "one" }], "otherwise": "other" }"#,
//! ).unwrap();
//!
//! let recorder = Recorder::new();
//! let list = recorded(&config, &recorder).unwrap();
//! assert_eq!(when(&1, list), "one");
//! assert_eq!(recorder.calls(), vec![0]);
//! ```

use std::cell::RefCell;
use when::{CaseList, WhenConfig, WhenError};

#[cfg(feature = "fixtures")]
pub mod fixture;

/// Logs the index of every producer that ran.
#[derive(Debug, Default)]
pub struct Recorder {
    calls: RefCell<Vec<usize>>,
}

impl Recorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that producer `index` ran, passing `result` through.
    pub fn record<R>(&self, index: usize, result: R) -> R {
        self.calls.borrow_mut().push(index);
        result
    }

    /// Indices recorded so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<usize> {
        self.calls.borrow().clone()
    }
}

/// Build a case list from `config` whose producers report to `recorder`.
///
/// Case `i` of the config records index `i`; `otherwise` records
/// `config.cases.len()`.
///
/// # Errors
///
/// Returns [`WhenError::TooManyCases`] like [`WhenConfig::build`].
pub fn recorded<'a, T: Clone, A: Clone>(
    config: &'a WhenConfig<T, A>,
    recorder: &'a Recorder,
) -> Result<CaseList<'a, T, A>, WhenError> {
    config.build_with(|index, then| move || recorder.record(index, then.clone()))
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{recorded, Recorder};
    pub use when::prelude::*;
    pub use when::WhenConfig;
}

#[cfg(test)]
mod tests {
    use super::*;
    use when::{try_when, when};

    fn config() -> WhenConfig<i64, String> {
        WhenConfig::from_value(serde_json::json!({
            "cases": [
                { "type": "value", "value": 1, "then": "one" },
                { "type": "value", "value": 2, "then": "two" },
                { "type": "value", "value": 3, "then": "three" }
            ],
            "otherwise": "unknown"
        }))
        .unwrap()
    }

    #[test]
    fn test_recorder_passes_result_through() {
        let recorder = Recorder::new();
        assert_eq!(recorder.record(4, "x"), "x");
        assert_eq!(recorder.calls(), vec![4]);
    }

    #[test]
    fn test_only_selected_producer_runs() {
        let config = config();

        let recorder = Recorder::new();
        assert_eq!(when(&2, recorded(&config, &recorder).unwrap()), "two");
        assert_eq!(recorder.calls(), vec![1]);

        let recorder = Recorder::new();
        assert_eq!(when(&9, recorded(&config, &recorder).unwrap()), "unknown");
        assert_eq!(recorder.calls(), vec![3]);
    }

    #[test]
    fn test_recorded_rejects_too_many_cases() {
        let cases: Vec<_> = (0..=when::MAX_CASES as i64)
            .map(|n| serde_json::json!({ "type": "value", "value": n, "then": "x" }))
            .collect();
        let config: WhenConfig<i64, String> =
            WhenConfig::from_value(serde_json::json!({ "cases": cases })).unwrap();

        let recorder = Recorder::new();
        assert!(matches!(
            recorded(&config, &recorder),
            Err(WhenError::TooManyCases { .. })
        ));
    }

    #[test]
    fn test_no_producer_runs_without_match() {
        let config: WhenConfig<i64, String> = WhenConfig::from_value(serde_json::json!({
            "cases": [{ "type": "value", "value": 1, "then": "one" }]
        }))
        .unwrap();

        let recorder = Recorder::new();
        let result = try_when(&2, recorded(&config, &recorder).unwrap());
        assert_eq!(result, Err(WhenError::NoMatch { cases: 1 }));
        assert!(recorder.calls().is_empty());
    }
}
