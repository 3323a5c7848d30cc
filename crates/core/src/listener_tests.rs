// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::{assert_log, with_tracing};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn on_complete_closure_receives_result() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut listener = on_complete(move |n: u32| sink.borrow_mut().push(n));

    listener.on_complete(1);
    listener.on_complete(2);

    assert_eq!(*seen.borrow(), vec![1, 2]);
}

#[test]
fn on_complete_closure_ignores_failure() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut listener = on_complete(move |n: u32| sink.borrow_mut().push(n));

    listener.on_error(Failure::new("ignored"));

    assert!(seen.borrow().is_empty());
}

#[test]
fn callbacks_route_each_side() {
    let results = Rc::new(RefCell::new(Vec::new()));
    let errors = Rc::new(RefCell::new(Vec::new()));
    let (r, e) = (Rc::clone(&results), Rc::clone(&errors));
    let mut listener = callbacks(
        move |s: &'static str| r.borrow_mut().push(s),
        move |f: Failure| e.borrow_mut().push(f),
    );

    listener.on_complete("admin");
    listener.on_error(Failure::timed_out("slow"));

    assert_eq!(*results.borrow(), vec!["admin"]);
    assert_eq!(*errors.borrow(), vec![Failure::timed_out("slow")]);
}

#[test]
fn boxed_listener_forwards_both_callbacks() {
    let errors = Rc::new(RefCell::new(0));
    let e = Rc::clone(&errors);
    let mut boxed: Box<dyn Listener<()>> = Box::new(callbacks(
        |_: ()| {},
        move |_: Failure| *e.borrow_mut() += 1,
    ));

    boxed.on_complete(());
    boxed.on_error(Failure::new("one"));

    assert_eq!(*errors.borrow(), 1);
}

#[test]
fn unhandled_failure_is_logged() {
    let (logs, ()) = with_tracing(|| {
        let mut listener = on_complete(|_: u32| {});
        listener.on_error(Failure::invalid("bad id"));
    });

    assert_log(&logs, "level", "WARN");
    assert_log(&logs, "failure", "invalid: bad id");
}
