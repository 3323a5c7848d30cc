// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot task with a completion listener.
//!
//! A [`Task`] is the producing side of a one-shot [`NotificationChannel`]:
//! whoever drives the work calls [`Task::complete`] or [`Task::fail`] once,
//! and the registered listener hears about it.
//!
//! [`Task::wait`] wraps the listener protocol back into a plain return value
//! so callers that just want the outcome do not have to write a listener.
//! The work it drives only gets a [`Completer`], which can report an outcome
//! but cannot swap out the listener that collects it.

use crate::channel::{contract_violation, ChannelError, Dispatch, NotificationChannel};
use crate::failure::Failure;
use crate::listener::Listener;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// Errors from [`Task::wait`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("task failed: {0}")]
    Failed(Failure),
    #[error("task {0} finished without reporting an outcome")]
    Incomplete(String),
}

/// A named unit of work that reports exactly one outcome.
#[derive(Debug)]
pub struct Task<T> {
    name: String,
    channel: NotificationChannel<T>,
}

impl<T> Task<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channel: NotificationChannel::one_shot(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register the completion listener, replacing any earlier one.
    pub fn set_listener(&mut self, listener: impl Listener<T> + 'static) {
        self.channel.register(listener);
    }

    /// True once the task has reported an outcome.
    pub fn is_finished(&self) -> bool {
        self.channel.has_fired()
    }

    /// Report a successful result.
    ///
    /// # Panics
    ///
    /// Panics if the task already reported an outcome.
    #[track_caller]
    pub fn complete(&mut self, result: T) -> Dispatch {
        match self.try_complete(result) {
            Ok(dispatch) => dispatch,
            Err(err) => contract_violation(err),
        }
    }

    /// Report a failure.
    ///
    /// # Panics
    ///
    /// Panics if the task already reported an outcome.
    #[track_caller]
    pub fn fail(&mut self, failure: Failure) -> Dispatch {
        match self.try_fail(failure) {
            Ok(dispatch) => dispatch,
            Err(err) => contract_violation(err),
        }
    }

    /// Report a successful result unless an outcome was already reported.
    pub fn try_complete(&mut self, result: T) -> Result<Dispatch, ChannelError> {
        let dispatch = self.channel.try_notify_success(result)?;
        tracing::info!(task = %self.name, ?dispatch, "task completed");
        Ok(dispatch)
    }

    /// Report a failure unless an outcome was already reported.
    pub fn try_fail(&mut self, failure: Failure) -> Result<Dispatch, ChannelError> {
        let message = failure.to_string();
        let dispatch = self.channel.try_notify_failure(failure)?;
        tracing::info!(task = %self.name, error = %message, ?dispatch, "task failed");
        Ok(dispatch)
    }
}

/// Producer side of a [`Task`] handed to the work driven by [`Task::wait`].
///
/// Exposes only the outcome-reporting half of the task.
pub struct Completer<'a, T> {
    task: &'a mut Task<T>,
}

impl<T> Completer<'_, T> {
    pub fn name(&self) -> &str {
        self.task.name()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// See [`Task::complete`].
    #[track_caller]
    pub fn complete(&mut self, result: T) -> Dispatch {
        self.task.complete(result)
    }

    /// See [`Task::fail`].
    #[track_caller]
    pub fn fail(&mut self, failure: Failure) -> Dispatch {
        self.task.fail(failure)
    }

    pub fn try_complete(&mut self, result: T) -> Result<Dispatch, ChannelError> {
        self.task.try_complete(result)
    }

    pub fn try_fail(&mut self, failure: Failure) -> Result<Dispatch, ChannelError> {
        self.task.try_fail(failure)
    }
}

impl<T: 'static> Task<T> {
    /// Drive the task with `run` and return its outcome directly.
    ///
    /// Installs its own listener (replacing any registered one), hands a
    /// [`Completer`] to `run`, and converts whatever `run` reported into a
    /// `Result`. If `run` returns without reporting, the task is
    /// [`TaskError::Incomplete`].
    pub fn wait<F>(mut self, run: F) -> Result<T, TaskError>
    where
        F: FnOnce(&mut Completer<'_, T>),
    {
        let slot = Rc::new(RefCell::new(None));
        self.set_listener(OutcomeSlot {
            slot: Rc::clone(&slot),
        });
        run(&mut Completer { task: &mut self });

        let outcome = slot.borrow_mut().take();
        match outcome {
            Some(Ok(value)) => Ok(value),
            Some(Err(failure)) => Err(TaskError::Failed(failure)),
            None => Err(TaskError::Incomplete(self.name)),
        }
    }
}

/// Listener that parks the outcome for [`Task::wait`].
struct OutcomeSlot<T> {
    slot: Rc<RefCell<Option<Result<T, Failure>>>>,
}

impl<T> Listener<T> for OutcomeSlot<T> {
    fn on_complete(&mut self, result: T) {
        *self.slot.borrow_mut() = Some(Ok(result));
    }

    fn on_error(&mut self, failure: Failure) {
        *self.slot.borrow_mut() = Some(Err(failure));
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
