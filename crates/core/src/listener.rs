// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener abstraction shared by task completion and click delivery.
//!
//! A [`Listener`] receives either a result or a [`Failure`]. Listeners that
//! only care about results (click handlers, fire-and-forget tasks) implement
//! `on_complete` alone; unhandled failures are logged instead of dropped
//! silently.
//!
//! Closures can stand in for a listener:
//!
//! ```ignore
//! channel.register(on_complete(|name: String| println!("hello {name}")));
//! channel.register(callbacks(
//!     |name: String| println!("hello {name}"),
//!     |err| eprintln!("lookup failed: {err}"),
//! ));
//! ```

use crate::failure::Failure;

/// Receiver of a result or a failure.
pub trait Listener<T> {
    /// Called with the produced result.
    fn on_complete(&mut self, result: T);

    /// Called when the producer failed.
    fn on_error(&mut self, failure: Failure) {
        tracing::warn!(error = %failure, "failure reached a listener without an error handler");
    }
}

impl<T, L: Listener<T> + ?Sized> Listener<T> for Box<L> {
    fn on_complete(&mut self, result: T) {
        (**self).on_complete(result);
    }

    fn on_error(&mut self, failure: Failure) {
        (**self).on_error(failure);
    }
}

/// Listener backed by a single success closure. Built by [`on_complete`].
#[derive(Clone)]
pub struct OnComplete<F> {
    complete: F,
}

/// Adapt a success-only closure into a [`Listener`].
pub fn on_complete<T, F>(complete: F) -> OnComplete<F>
where
    F: FnMut(T),
{
    OnComplete { complete }
}

impl<T, F: FnMut(T)> Listener<T> for OnComplete<F> {
    fn on_complete(&mut self, result: T) {
        (self.complete)(result);
    }
}

/// Listener backed by a success closure and a failure closure. Built by [`callbacks`].
#[derive(Clone)]
pub struct Callbacks<S, E> {
    complete: S,
    error: E,
}

/// Adapt a pair of closures into a [`Listener`].
pub fn callbacks<T, S, E>(complete: S, error: E) -> Callbacks<S, E>
where
    S: FnMut(T),
    E: FnMut(Failure),
{
    Callbacks { complete, error }
}

impl<T, S, E> Listener<T> for Callbacks<S, E>
where
    S: FnMut(T),
    E: FnMut(Failure),
{
    fn on_complete(&mut self, result: T) {
        (self.complete)(result);
    }

    fn on_error(&mut self, failure: Failure) {
        (self.error)(failure);
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
