//! when - Kotlin-style `when` expressions for Rust
//!
//! Pick exactly one lazily evaluated branch out of an ordered list of cases.
//!
//! # Architecture
//!
//! - [`Candidate`] — What a case compares against (value, any-of, guard, default)
//! - [`Case`] — Candidate + deferred producer (`FnOnce` thunk)
//! - [`CaseList`] — Ordered cases with first-match-wins semantics
//! - [`when()`] / [`try_when()`] — Evaluate a case list against a scrutinee
//! - [`when!`] — Concise syntax layer over the above
//!
//! # Key Design Insights
//!
//! 1. **Lazy branches**: Producers are thunks. Only the selected one runs, so
//!    side effects of unselected branches never happen.
//!
//! 2. **Default is a fallback, not a wildcard**: A default case is taken only
//!    if no positive case matched, wherever it is declared. Among several
//!    defaults the first wins.
//!
//! 3. **Missing default is a bug**: [`when()`] panics when nothing matched and
//!    no default exists, like a non-exhaustive `match`. [`try_when()`] reports
//!    the same condition as [`WhenError::NoMatch`].
//!
//! # Example
//!
//! ```
//! use when::prelude::*;
//!
//! let describe = |n: i32| {
//!     when(&n, vec![
//!         Case::value(1, || "one".to_string()),
//!         Case::any_of([2, 3], || "a few".to_string()),
//!         Case::guard(|v| *v < 0, || "negative".to_string()),
//!         Case::otherwise(|| format!("{n} is many")),
//!     ])
//! };
//!
//! assert_eq!(describe(1), "one");
//! assert_eq!(describe(3), "a few");
//! assert_eq!(describe(-4), "negative");
//! assert_eq!(describe(9), "9 is many");
//! ```
//!
//! # Config
//!
//! With feature `"config"`, [`WhenConfig`] loads case lists from JSON/YAML.

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod candidate;
mod case;
mod case_list;
mod macros;
mod matcher;
mod trace;

#[cfg(feature = "config")]
mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

// Core types
pub use candidate::{Candidate, CandidateKind, Else, Guard};
pub use case::{associate, Case, Producer};
pub use case_list::{cases, CaseList};
pub use matcher::{try_when, when};

// Config (feature-gated)
#[cfg(feature = "config")]
pub use config::{CaseConfig, WhenConfig};

// Trace types
pub use trace::{EvalStep, EvalTrace};

#[doc(hidden)]
pub use macros::__when_arm;

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use when::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        associate,
        cases,
        try_when,
        when,
        // Core types
        Candidate,
        CandidateKind,
        Case,
        CaseList,
        Else,
        // Trace types
        EvalStep,
        EvalTrace,
        // Errors
        WhenError,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum number of cases accepted from a config file.
///
/// Hand-written case lists are not limited; this guards config loading only.
pub const MAX_CASES: usize = 256;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from `when` evaluation and config loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhenError {
    /// No case matched and no default was supplied.
    NoMatch {
        /// Number of cases that were tested.
        cases: usize,
    },
    /// Too many cases in a config-driven case list.
    TooManyCases {
        /// Actual count of cases.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// Configuration deserialization or construction failed.
    InvalidConfig {
        /// The underlying error message.
        source: String,
    },
}

impl std::fmt::Display for WhenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatch { cases } => {
                write!(
                    f,
                    "non-exhaustive when: none of {cases} cases matched and no default \
                     was supplied; add a default case"
                )
            }
            Self::TooManyCases { count, max } => {
                write!(f, "when has {count} cases, but maximum allowed is {max}")
            }
            Self::InvalidConfig { source } => {
                write!(f, "invalid config: {source}")
            }
        }
    }
}

impl std::error::Error for WhenError {}
