// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op listener.

use relay_core::{Failure, Listener};

/// Listener that silently discards results and failures.
///
/// Unlike leaving a channel empty, a registered no-op listener counts as
/// delivery and swallows failures without the default warning.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpListener;

impl NoOpListener {
    pub fn new() -> Self {
        Self
    }
}

impl<T> Listener<T> for NoOpListener {
    fn on_complete(&mut self, _result: T) {}

    fn on_error(&mut self, _failure: Failure) {}
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
