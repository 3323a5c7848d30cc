// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use relay_core::{Dispatch, NotificationChannel};

#[test]
fn noop_listener_counts_as_delivery() {
    let mut channel = NotificationChannel::<u32>::one_shot();
    channel.register(NoOpListener::new());
    assert_eq!(channel.notify_failure(Failure::new("ignored")), Dispatch::Delivered);
}

#[test]
fn noop_listener_accepts_any_result_type() {
    let mut listener = NoOpListener::default();
    Listener::<u8>::on_complete(&mut listener, 1);
    Listener::<String>::on_complete(&mut listener, "x".to_string());
    assert!(std::mem::size_of_val(&listener) == 0);
}
