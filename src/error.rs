use thiserror::Error;

/// Unified error type for item keys, bounds and the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A precondition on a record was broken (non-unit count, empty record).
    /// These are programmer errors; callers should not retry.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
    /// A fuzzy mode could not be parsed or built from configuration.
    #[error("Invalid fuzzy mode: {0}")]
    InvalidFuzzyMode(String),
}

impl Error {
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!(%msg, "item invariant violated");
        Error::InvariantViolation(msg)
    }
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
