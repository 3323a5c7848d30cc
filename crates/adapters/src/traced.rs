// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced listener wrapper for consistent observability

use relay_core::{Failure, Listener};
use std::fmt;

/// Wrapper that adds tracing to any Listener
#[derive(Clone)]
pub struct TracedListener<L> {
    label: String,
    inner: L,
    payloads: bool,
}

impl<L> TracedListener<L> {
    /// Wrap `inner`. Result payloads are logged when `RELAY_TRACE_PAYLOADS=1`.
    pub fn new(label: impl Into<String>, inner: L) -> Self {
        Self {
            label: label.into(),
            inner,
            payloads: crate::env::trace_payloads(),
        }
    }

    /// Override whether result payloads are logged.
    pub fn with_payloads(mut self, payloads: bool) -> Self {
        self.payloads = payloads;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<T: fmt::Debug, L: Listener<T>> Listener<T> for TracedListener<L> {
    fn on_complete(&mut self, result: T) {
        let span = tracing::info_span!("listener.complete", label = %self.label);
        let _guard = span.enter();
        if self.payloads {
            tracing::info!(?result, "result received");
        } else {
            tracing::info!("result received");
        }
        let start = std::time::Instant::now();
        self.inner.on_complete(result);
        let elapsed_us = start.elapsed().as_micros() as u64;
        tracing::debug!(elapsed_us, "listener returned");
    }

    fn on_error(&mut self, failure: Failure) {
        let span = tracing::info_span!("listener.error", label = %self.label);
        let _guard = span.enter();
        tracing::warn!(kind = %failure.kind, error = %failure, "failure received");
        self.inner.on_error(failure);
    }
}

impl<L> fmt::Debug for TracedListener<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TracedListener")
            .field("label", &self.label)
            .field("payloads", &self.payloads)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
