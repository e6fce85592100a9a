//! Config types for config-driven case lists.
//!
//! These types mirror the runtime types but are serde-deserializable. The
//! producer of each case is the configured action: selecting a case yields
//! a clone of its action.
//!
//! # Relationship to runtime types
//!
//! | Config type | Runtime type | Loader method |
//! |-------------|-------------|---------------|
//! | [`WhenConfig`] | [`CaseList`](crate::CaseList) | [`WhenConfig::build()`] |
//! | [`CaseConfig`] | [`Case`](crate::Case) | via `WhenConfig::build()` |
//!
//! Guards are closures and have no config form.
//!
//! # Format
//!
//! ```yaml
//! cases:
//!   - { type: value, value: 1, then: one }
//!   - { type: any_of, values: [2, 3], then: few }
//! otherwise: many
//! ```

use crate::{Case, CaseList, WhenError, MAX_CASES};
use serde::Deserialize;

/// Configuration for a [`CaseList`](crate::CaseList).
///
/// Deserializes from JSON/YAML. `otherwise`, when present, is appended
/// after all `cases` as a default.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>, A: Deserialize<'de>"))]
pub struct WhenConfig<T, A> {
    /// Cases to test in order (first-match-wins).
    #[serde(default = "Vec::new")]
    pub cases: Vec<CaseConfig<T, A>>,

    /// Fallback when no case matches.
    #[serde(default)]
    pub otherwise: Option<A>,
}

/// Configuration for a [`Case`](crate::Case).
///
/// Uses `#[serde(tag = "type")]` for discriminated union deserialization:
///
/// ```json
/// { "type": "value", "value": 1, "then": "one" }
/// { "type": "any_of", "values": [2, 3], "then": "few" }
/// { "type": "default", "then": "fallback" }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
#[serde(bound(deserialize = "T: Deserialize<'de>, A: Deserialize<'de>"))]
pub enum CaseConfig<T, A> {
    /// Selected when the scrutinee equals `value`.
    #[serde(rename = "value")]
    Value {
        /// The candidate value.
        value: T,
        /// The action yielded when selected.
        then: A,
    },

    /// Selected when the scrutinee equals any of `values`.
    #[serde(rename = "any_of")]
    AnyOf {
        /// The candidate values.
        values: Vec<T>,
        /// The action yielded when selected.
        then: A,
    },

    /// Selected when no positive case matched.
    #[serde(rename = "default")]
    Default {
        /// The action yielded when selected.
        then: A,
    },
}

impl<T, A> WhenConfig<T, A> {
    /// Total number of cases, `otherwise` included.
    pub fn len(&self) -> usize {
        self.cases.len() + usize::from(self.otherwise.is_some())
    }

    /// Returns `true` if there are no cases and no `otherwise`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, A> WhenConfig<T, A>
where
    T: for<'de> Deserialize<'de>,
    A: for<'de> Deserialize<'de>,
{
    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`WhenError::InvalidConfig`] if the text is not a valid config.
    pub fn from_json(json: &str) -> Result<Self, WhenError> {
        serde_json::from_str(json).map_err(|e| WhenError::InvalidConfig {
            source: e.to_string(),
        })
    }

    /// Deserialize a config from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`WhenError::InvalidConfig`] if the value is not a valid config.
    pub fn from_value(value: serde_json::Value) -> Result<Self, WhenError> {
        serde_json::from_value(value).map_err(|e| WhenError::InvalidConfig {
            source: e.to_string(),
        })
    }
}

impl<T: Clone, A> WhenConfig<T, A> {
    /// Build a runtime case list, creating each producer with `producer`.
    ///
    /// `producer` receives the case index and its action. Case `i` of
    /// `cases` gets index `i`; `otherwise` gets `cases.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`WhenError::TooManyCases`] if the config has more than
    /// [`MAX_CASES`] cases.
    pub fn build_with<'a, P>(
        &'a self,
        producer: impl Fn(usize, &'a A) -> P,
    ) -> Result<CaseList<'a, T, A>, WhenError>
    where
        P: FnOnce() -> A + 'a,
    {
        let count = self.len();
        if count > MAX_CASES {
            return Err(WhenError::TooManyCases {
                count,
                max: MAX_CASES,
            });
        }

        let mut list: CaseList<'a, T, A> = self
            .cases
            .iter()
            .enumerate()
            .map(|(index, case)| match case {
                CaseConfig::Value { value, then } => {
                    Case::value(value.clone(), producer(index, then))
                }
                CaseConfig::AnyOf { values, then } => {
                    Case::any_of(values.iter().cloned(), producer(index, then))
                }
                CaseConfig::Default { then } => Case::otherwise(producer(index, then)),
            })
            .collect();

        if let Some(otherwise) = &self.otherwise {
            list.push(Case::otherwise(producer(self.cases.len(), otherwise)));
        }

        Ok(list)
    }
}

impl<T: Clone, A: Clone> WhenConfig<T, A> {
    /// Build a runtime case list. Each producer clones its action.
    ///
    /// The config is borrowed, so one config can back many evaluations.
    ///
    /// # Errors
    ///
    /// Returns [`WhenError::TooManyCases`] if the config has more than
    /// [`MAX_CASES`] cases.
    pub fn build(&self) -> Result<CaseList<'_, T, A>, WhenError> {
        self.build_with(|_, then| move || then.clone())
    }
}

impl<T: Clone + PartialEq, A: Clone> WhenConfig<T, A> {
    /// Build and evaluate against `value`.
    ///
    /// # Errors
    ///
    /// - [`WhenError::TooManyCases`] — see [`build()`](Self::build)
    /// - [`WhenError::NoMatch`] — nothing matched and no default is configured
    pub fn evaluate(&self, value: &T) -> Result<A, WhenError> {
        crate::try_when(value, self.build()?)
    }
}
