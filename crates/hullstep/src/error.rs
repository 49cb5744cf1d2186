//! Error type shared by the point set, the tracer, and the scatter sampler.
//!
//! Every variant signals a caller or internal bug rather than a transient
//! condition; nothing here is retried.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HullError {
    /// A point set was built from zero points.
    EmptyInput,
    /// A point index outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
    /// The tracer cannot serve the request in its current status.
    InvalidState { reason: String },
    /// Sampler configuration that cannot produce points.
    InvalidParams { reason: String },
}

impl HullError {
    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_params(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "point set needs at least one point"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "point index {index} out of range for {len} points")
            }
            Self::InvalidState { reason } => write!(f, "invalid tracer state: {reason}"),
            Self::InvalidParams { reason } => write!(f, "invalid scatter params: {reason}"),
        }
    }
}

impl std::error::Error for HullError {}
