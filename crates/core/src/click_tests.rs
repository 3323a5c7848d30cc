// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::listener::on_complete;
use std::cell::RefCell;
use std::rc::Rc;

fn click_log() -> (Rc<RefCell<Vec<Click>>>, impl Listener<Click> + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, on_complete(move |click: Click| sink.borrow_mut().push(click)))
}

#[test]
fn click_without_listener_is_dropped() {
    let mut button = Button::new("submit");
    assert!(!button.has_click_listener());
    assert_eq!(button.click(), Dispatch::Dropped);
}

#[test]
fn every_click_is_delivered() {
    let (log, listener) = click_log();
    let mut button = Button::new("submit");
    button.set_on_click_listener(listener);

    for _ in 0..3 {
        assert_eq!(button.click(), Dispatch::Delivered);
    }

    let clicks = log.borrow();
    assert_eq!(clicks.len(), 3);
    assert!(clicks.iter().all(|c| c.view.as_str() == "submit"));
}

#[test]
fn new_listener_replaces_old_one() {
    let (first, first_listener) = click_log();
    let (second, second_listener) = click_log();
    let mut button = Button::new("menu");
    button.set_on_click_listener(first_listener);
    button.click();
    button.set_on_click_listener(second_listener);
    button.click();
    button.click();

    assert_eq!(first.borrow().len(), 1);
    assert_eq!(second.borrow().len(), 2);
}

#[test]
fn clearing_listener_stops_delivery() {
    let (log, listener) = click_log();
    let mut button = Button::new("close");
    button.set_on_click_listener(listener);

    assert!(button.clear_on_click_listener());
    assert_eq!(button.click(), Dispatch::Dropped);
    assert!(log.borrow().is_empty());
}

#[test]
fn click_carries_view_id() {
    let (log, listener) = click_log();
    let mut button = Button::new(ViewId::new("ok"));
    button.set_on_click_listener(listener);
    button.click();

    assert_eq!(button.id(), &ViewId::new("ok"));
    assert_eq!(
        log.borrow().first(),
        Some(&Click {
            view: ViewId::new("ok")
        })
    );
}
