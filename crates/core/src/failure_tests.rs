// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    other     = { Failure::new("boom"),          "other: boom" },
    cancelled = { Failure::cancelled("stop"),    "cancelled: stop" },
    timed_out = { Failure::timed_out("slow"),    "timed_out: slow" },
    invalid   = { Failure::invalid("bad input"), "invalid: bad input" },
)]
fn display(failure: Failure, expected: &str) {
    assert_eq!(failure.to_string(), expected);
}

#[test]
fn from_error_keeps_message() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such user");
    let failure = Failure::from_error(&io);
    assert_eq!(failure.kind, FailureKind::Other);
    assert_eq!(failure.message, "no such user");
}

#[test]
fn kind_defaults_when_missing_from_json() {
    let failure: Failure = serde_json::from_str(r#"{"message":"lost"}"#).unwrap();
    assert_eq!(failure, Failure::new("lost"));
}

#[test]
fn kind_serializes_snake_case() {
    let json = serde_json::to_string(&Failure::timed_out("late")).unwrap();
    assert_eq!(json, r#"{"kind":"timed_out","message":"late"}"#);
}
