// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure payload delivered to a listener's error callback.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No more specific classification applies.
    #[default]
    Other,
    /// The operation was cancelled before it produced a result.
    Cancelled,
    /// The operation ran out of time.
    TimedOut,
    /// The input given to the operation was rejected.
    Invalid,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Other => "other",
            FailureKind::Cancelled => "cancelled",
            FailureKind::TimedOut => "timed_out",
            FailureKind::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error handed to [`Listener::on_error`](crate::Listener::on_error).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct Failure {
    #[serde(default)]
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Other,
            message: message.into(),
        }
    }

    pub fn with_kind(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::with_kind(FailureKind::Cancelled, message)
    }

    pub fn timed_out(message: impl Into<String>) -> Self {
        Self::with_kind(FailureKind::TimedOut, message)
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::with_kind(FailureKind::Invalid, message)
    }

    /// Wrap any error as a failure, keeping its display text.
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
#[path = "failure_tests.rs"]
mod tests;
