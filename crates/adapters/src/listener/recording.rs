// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording listener for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use parking_lot::Mutex;
use relay_core::{Failure, Listener};
use std::sync::Arc;

/// Recorded listener callback
#[derive(Debug, Clone, PartialEq)]
pub enum ListenerCall<T> {
    Complete(T),
    Error(Failure),
}

/// Listener that records every callback.
///
/// Clones share one log, so a test can keep a handle while the channel owns
/// the registered copy.
pub struct RecordingListener<T> {
    inner: Arc<Mutex<Vec<ListenerCall<T>>>>,
}

impl<T> Clone for RecordingListener<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for RecordingListener<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone> RecordingListener<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ListenerCall<T>> {
        self.inner.lock().clone()
    }

    /// Results passed to `on_complete`, in order
    pub fn completions(&self) -> Vec<T> {
        self.inner
            .lock()
            .iter()
            .filter_map(|call| match call {
                ListenerCall::Complete(result) => Some(result.clone()),
                ListenerCall::Error(_) => None,
            })
            .collect()
    }

    /// Failures passed to `on_error`, in order
    pub fn errors(&self) -> Vec<Failure> {
        self.inner
            .lock()
            .iter()
            .filter_map(|call| match call {
                ListenerCall::Error(failure) => Some(failure.clone()),
                ListenerCall::Complete(_) => None,
            })
            .collect()
    }
}

impl<T> Listener<T> for RecordingListener<T> {
    fn on_complete(&mut self, result: T) {
        self.inner.lock().push(ListenerCall::Complete(result));
    }

    fn on_error(&mut self, failure: Failure) {
        self.inner.lock().push(ListenerCall::Error(failure));
    }
}

#[cfg(test)]
#[path = "recording_tests.rs"]
mod tests;
