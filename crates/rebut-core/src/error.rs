//! Framework validation errors.

use crate::preference::Preference;
use crate::sentence::Sentence;

/// Errors raised while constructing or checking a framework.
///
/// Validation errors are fatal at construction time. [`WcpViolation`] is the
/// one recoverable case: re-running construction with auto-repair enabled
/// synthesizes the missing contrapositive rules instead.
///
/// [`WcpViolation`]: FrameworkError::WcpViolation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    /// A rule derives an assumption, so the framework is not flat.
    #[error("framework is not flat: rule consequent `{0}` is an assumption")]
    NonFlat(Sentence),

    /// A preference mentions a sentence that is not an assumption.
    #[error("preference `{0}` involves a non-assumption")]
    InvalidPreference(Preference),

    /// The transitive closure of the preferences contains `a < a`.
    #[error("cycle detected in the preference relation")]
    CyclicPreference,

    /// Weak contraposition fails and auto-repair was not requested.
    #[error("weak contraposition is not satisfied")]
    WcpViolation,
}
