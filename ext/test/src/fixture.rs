//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the `when` engine.
//!
//! ```yaml
//! name: numbers
//! when:
//!   cases:
//!     - { type: value, value: 1, then: one }
//!   otherwise: unknown
//! unreachable: []
//! cases:
//!   - { name: hit, value: 1, expect: one }
//!   - { name: miss, value: 9, expect: unknown }
//! ```
//!
//! A case without `expect` asserts the non-exhaustive path: `try_when`
//! reports [`WhenError::NoMatch`] and `when` panics.

use crate::{recorded, Recorder};
use serde::Deserialize;
use serde_json::Value;
use std::panic::{self, AssertUnwindSafe};
use when::{try_when, when, WhenConfig, WhenError};

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub when: WhenConfig<Value, String>,
    /// Expected [`CaseList::unreachable`](when::CaseList::unreachable) result, if checked.
    #[serde(default)]
    pub unreachable: Option<Vec<usize>>,
    pub cases: Vec<TestCase>,
}

/// Test case
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub value: Value,
    /// `None` means no case may match and there is no default.
    #[serde(default)]
    pub expect: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: Option<String>,
    pub actual: Option<String>,
    /// Producer indices that ran, in order.
    pub producers_run: Vec<usize>,
    /// Whether `when` panicked for this value.
    pub panicked: bool,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Run all test cases and return results
    ///
    /// # Errors
    ///
    /// Returns the build error if the fixture's case list cannot be built.
    pub fn run(&self) -> Result<Vec<CaseResult>, WhenError> {
        self.cases.iter().map(|case| self.run_case(case)).collect()
    }

    fn run_case(&self, case: &TestCase) -> Result<CaseResult, WhenError> {
        let recorder = Recorder::new();
        let actual = match try_when(&case.value, recorded(&self.when, &recorder)?) {
            Ok(action) => Some(action),
            Err(WhenError::NoMatch { .. }) => None,
            Err(e) => return Err(e),
        };
        let producers_run = recorder.calls();

        let panicked = actual.is_none() && {
            let list = self.when.build()?;
            panic::catch_unwind(AssertUnwindSafe(|| when(&case.value, list))).is_err()
        };

        // At most one producer, and only when something was selected
        let passed = actual == case.expect
            && producers_run.len() == usize::from(actual.is_some())
            && (actual.is_some() || panicked);

        Ok(CaseResult {
            case_name: case.name.clone(),
            passed,
            expected: case.expect.clone(),
            actual,
            producers_run,
            panicked,
        })
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        if let Some(expected) = &self.unreachable {
            let list = self
                .when
                .build()
                .unwrap_or_else(|e| panic!("Fixture '{}' failed to build: {e}", self.name));
            assert_eq!(
                &list.unreachable(),
                expected,
                "Fixture '{}' unreachable cases differ",
                self.name
            );
        }

        let results = self
            .run()
            .unwrap_or_else(|e| panic!("Fixture '{}' failed to build: {e}", self.name));
        for result in results {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {:?}, got {:?} (producers run: {:?}, panicked: {})",
                self.name,
                result.case_name,
                result.expected,
                result.actual,
                result.producers_run,
                result.panicked
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMBERS: &str = "
name: numbers
when:
  cases:
    - { type: value, value: 1, then: one }
    - { type: value, value: 2, then: two }
  otherwise: unknown
cases:
  - { name: hit, value: 2, expect: two }
  - { name: miss, value: 7, expect: unknown }
";

    #[test]
    fn parse_and_run() {
        let fixture = Fixture::from_yaml(NUMBERS).unwrap();
        let results = fixture.run().unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed));
        assert_eq!(results[0].producers_run, vec![1]);
        assert_eq!(results[1].producers_run, vec![2]);
    }

    #[test]
    fn wrong_expectation_fails() {
        let yaml = NUMBERS.replace("expect: two", "expect: one");
        let fixture = Fixture::from_yaml(&yaml).unwrap();
        let results = fixture.run().unwrap();
        assert!(!results[0].passed);
        assert_eq!(results[0].actual.as_deref(), Some("two"));
    }

    #[test]
    fn non_exhaustive_case_panics() {
        let yaml = "
name: no default
when:
  cases:
    - { type: value, value: 1, then: one }
cases:
  - { name: fatal, value: 2 }
";
        let fixture = Fixture::from_yaml(yaml).unwrap();
        let results = fixture.run().unwrap();
        assert!(results[0].passed);
        assert!(results[0].panicked);
        assert!(results[0].producers_run.is_empty());
    }

    #[test]
    fn oversized_case_list_is_a_build_error() {
        let cases: Vec<_> = (0..=when::MAX_CASES)
            .map(|n| serde_json::json!({ "type": "value", "value": n, "then": "x" }))
            .collect();
        let fixture = Fixture {
            name: "oversized".into(),
            description: String::new(),
            when: WhenConfig::from_value(serde_json::json!({ "cases": cases })).unwrap(),
            unreachable: None,
            cases: vec![TestCase {
                name: "any".into(),
                value: serde_json::json!(0),
                expect: Some("x".into()),
            }],
        };

        assert!(matches!(
            fixture.run(),
            Err(WhenError::TooManyCases { count, .. }) if count == when::MAX_CASES + 1
        ));
    }

    #[test]
    fn multi_document() {
        let yaml = format!("{NUMBERS}---{NUMBERS}");
        let fixtures = Fixture::from_yaml_multi(&yaml).unwrap();
        assert_eq!(fixtures.len(), 2);
    }
}
