//! Common error infrastructure for tactics-core.
//!
//! Domain-specific errors (`ActionError`, `InitializationError`) live next to
//! the code that raises them and classify themselves with [`ErrorSeverity`].
//! Invariant violations are not errors: they panic at the point of detection.

/// Severity level of an error, used by callers to decide how to react.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The same request may succeed later without changes.
    ///
    /// Examples: another action is in flight, not enough action points yet.
    Recoverable,

    /// The request itself is wrong and should not be repeated.
    ///
    /// Examples: unknown unit, target outside the action's target set.
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}
