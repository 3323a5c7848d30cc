// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-listener notification channel.
//!
//! A [`NotificationChannel`] holds at most one [`Listener`] and calls it
//! directly when the owner reports a result or a failure. There is no
//! queuing: a notification sent while no listener is registered is dropped.
//!
//! Channels come in two delivery modes:
//!
//! - [`Delivery::OneShot`]: the owner reports at most one outcome. A second
//!   report is a bug in the owner and panics (`try_notify_*` return
//!   [`ChannelError::AlreadyFired`] instead). A dropped notification still
//!   uses up the single firing.
//! - [`Delivery::Recurring`]: every trigger is delivered independently.

use crate::failure::Failure;
use crate::listener::Listener;
use thiserror::Error;

/// How many times a channel may fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delivery {
    /// Fires at most once, with either a result or a failure.
    #[default]
    OneShot,
    /// Fires once per trigger.
    Recurring,
}

impl Delivery {
    pub fn as_str(&self) -> &'static str {
        match self {
            Delivery::OneShot => "one_shot",
            Delivery::Recurring => "recurring",
        }
    }
}

impl std::fmt::Display for Delivery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A listener was registered and was called.
    Delivered,
    /// No listener was registered; the notification was discarded.
    Dropped,
}

impl Dispatch {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Dispatch::Delivered)
    }
}

/// Errors from channel operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("one-shot channel already fired")]
    AlreadyFired,
}

/// Registration point for one listener of `T` results.
pub struct NotificationChannel<T> {
    listener: Option<Box<dyn Listener<T>>>,
    delivery: Delivery,
    fired: bool,
}

impl<T> NotificationChannel<T> {
    pub fn new(delivery: Delivery) -> Self {
        Self {
            listener: None,
            delivery,
            fired: false,
        }
    }

    /// Channel for a task outcome: fires at most once.
    pub fn one_shot() -> Self {
        Self::new(Delivery::OneShot)
    }

    /// Channel for a repeating event source such as clicks.
    pub fn recurring() -> Self {
        Self::new(Delivery::Recurring)
    }

    pub fn delivery(&self) -> Delivery {
        self.delivery
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// True once a one-shot channel has been notified. Always false for
    /// recurring channels.
    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Store `listener`, replacing any previously registered one.
    pub fn register(&mut self, listener: impl Listener<T> + 'static) {
        let replaced = self.listener.replace(Box::new(listener)).is_some();
        tracing::trace!(delivery = %self.delivery, replaced, "listener registered");
    }

    /// Remove the registered listener. Returns whether one was present.
    pub fn clear(&mut self) -> bool {
        self.listener.take().is_some()
    }

    /// Deliver `result` to the listener, if any.
    ///
    /// # Panics
    ///
    /// Panics if this is a one-shot channel that has already fired.
    #[track_caller]
    pub fn notify_success(&mut self, result: T) -> Dispatch {
        match self.try_notify_success(result) {
            Ok(dispatch) => dispatch,
            Err(err) => contract_violation(err),
        }
    }

    /// Deliver `failure` to the listener, if any.
    ///
    /// # Panics
    ///
    /// Panics if this is a one-shot channel that has already fired.
    #[track_caller]
    pub fn notify_failure(&mut self, failure: Failure) -> Dispatch {
        match self.try_notify_failure(failure) {
            Ok(dispatch) => dispatch,
            Err(err) => contract_violation(err),
        }
    }

    /// Like [`notify_success`](Self::notify_success), but reports a repeated
    /// one-shot notification as an error instead of panicking.
    pub fn try_notify_success(&mut self, result: T) -> Result<Dispatch, ChannelError> {
        self.claim()?;
        let delivery = self.delivery;
        match self.listener.as_mut() {
            Some(listener) => {
                tracing::debug!(%delivery, "delivering result");
                listener.on_complete(result);
                Ok(Dispatch::Delivered)
            }
            None => {
                tracing::trace!(%delivery, "no listener, result dropped");
                Ok(Dispatch::Dropped)
            }
        }
    }

    /// Like [`notify_failure`](Self::notify_failure), but reports a repeated
    /// one-shot notification as an error instead of panicking.
    pub fn try_notify_failure(&mut self, failure: Failure) -> Result<Dispatch, ChannelError> {
        self.claim()?;
        let delivery = self.delivery;
        match self.listener.as_mut() {
            Some(listener) => {
                tracing::debug!(%delivery, error = %failure, "delivering failure");
                listener.on_error(failure);
                Ok(Dispatch::Delivered)
            }
            None => {
                tracing::trace!(%delivery, error = %failure, "no listener, failure dropped");
                Ok(Dispatch::Dropped)
            }
        }
    }

    fn claim(&mut self) -> Result<(), ChannelError> {
        if self.delivery == Delivery::OneShot {
            if self.fired {
                return Err(ChannelError::AlreadyFired);
            }
            self.fired = true;
        }
        Ok(())
    }
}

impl<T> Default for NotificationChannel<T> {
    fn default() -> Self {
        Self::one_shot()
    }
}

impl<T> std::fmt::Debug for NotificationChannel<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationChannel")
            .field("delivery", &self.delivery)
            .field("has_listener", &self.has_listener())
            .field("fired", &self.fired)
            .finish()
    }
}

#[allow(clippy::panic)]
#[track_caller]
pub(crate) fn contract_violation(err: ChannelError) -> ! {
    panic!("notification contract violated: {err}")
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
