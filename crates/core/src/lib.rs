// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! relay-core: single-listener notification channels and an
//! insertion-counting set wrapper.
//!
//! - [`NotificationChannel`] delivers a result or a [`Failure`] to at most
//!   one [`Listener`], either once ([`Task`]) or per trigger ([`Button`]).
//! - [`CountingSet`] counts attempted insertions while forwarding storage
//!   to an injected [`Backing`] set.
//! - [`Contact`] keeps required and optional fields apart in its types and
//!   checks the required ones at its JSON boundary.

pub mod channel;
pub mod click;
pub mod contact;
pub mod counting;
pub mod failure;
pub mod id;
pub mod listener;
pub mod task;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use channel::{ChannelError, Delivery, Dispatch, NotificationChannel};
pub use click::{Button, Click};
pub use contact::{require, Contact, ContactError};
pub use counting::{Backing, BoundedSet, CapacityError, CountingSet};
pub use failure::{Failure, FailureKind};
pub use id::ViewId;
pub use listener::{callbacks, on_complete, Callbacks, Listener, OnComplete};
pub use task::{Completer, Task, TaskError};
