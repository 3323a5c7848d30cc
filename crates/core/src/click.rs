// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clickable views.
//!
//! A [`Button`] owns a recurring [`NotificationChannel`] of [`Click`]s.
//! Click handlers are ordinary [`Listener`]s, so a plain closure works:
//!
//! ```ignore
//! let mut button = Button::new("submit");
//! button.set_on_click_listener(on_complete(|click: Click| println!("clicked {}", click.view)));
//! button.click();
//! ```

use crate::channel::{Dispatch, NotificationChannel};
use crate::id::ViewId;
use crate::listener::Listener;

/// A single click on a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub view: ViewId,
}

/// A view that reports clicks to one listener.
#[derive(Debug)]
pub struct Button {
    id: ViewId,
    clicks: NotificationChannel<Click>,
}

impl Button {
    pub fn new(id: impl Into<ViewId>) -> Self {
        Self {
            id: id.into(),
            clicks: NotificationChannel::recurring(),
        }
    }

    pub fn id(&self) -> &ViewId {
        &self.id
    }

    /// Register the click listener, replacing any earlier one.
    pub fn set_on_click_listener(&mut self, listener: impl Listener<Click> + 'static) {
        self.clicks.register(listener);
    }

    /// Remove the click listener. Returns whether one was present.
    pub fn clear_on_click_listener(&mut self) -> bool {
        self.clicks.clear()
    }

    pub fn has_click_listener(&self) -> bool {
        self.clicks.has_listener()
    }

    /// Simulate a user click.
    pub fn click(&mut self) -> Dispatch {
        let click = Click {
            view: self.id.clone(),
        };
        self.clicks.notify_success(click)
    }
}

#[cfg(test)]
#[path = "click_tests.rs"]
mod tests;
