//! Common error infrastructure for grass-core.
//!
//! Domain errors (`MapError`, `OrderError`, `LocateError`) live next to the
//! code that raises them. They all implement [`RoutingError`] so the control
//! loop can decide between retrying, idling, or picking another region without
//! matching on every variant.
//!
//! Nothing raised by this crate is fatal to the process.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The world may change under the caller; retrying later or with another
    /// region can succeed.
    ///
    /// Examples: no grass on the flag's axes, goal unreachable
    Recoverable,

    /// The request itself was malformed and must be changed before retrying.
    ///
    /// Examples: region outside the map, ragged map rows
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all grass-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait RoutingError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Stable across releases; suitable for log fields and test assertions.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
