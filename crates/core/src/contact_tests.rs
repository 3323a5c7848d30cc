// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn builder_sets_optional_fields() {
    let contact = Contact::new("Ada")
        .with_nickname("ada")
        .with_email("ada@example.com");

    assert_eq!(contact.name, "Ada");
    assert_eq!(contact.nickname.as_deref(), Some("ada"));
    assert_eq!(contact.email.as_deref(), Some("ada@example.com"));
}

#[yare::parameterized(
    nickname_wins = { Contact::new("Grace Hopper").with_nickname("amazing grace"), "amazing grace" },
    falls_back    = { Contact::new("Grace Hopper"),                                "Grace Hopper" },
)]
fn display_name(contact: Contact, expected: &str) {
    assert_eq!(contact.display_name(), expected);
}

#[test]
fn require_passes_present_value() {
    assert_eq!(require(Some(7), "age").unwrap(), 7);
}

#[test]
fn require_names_missing_field() {
    let err = require::<String>(None, "data").unwrap_err();
    assert!(matches!(err, ContactError::MissingRequired("data")));
    assert_eq!(err.to_string(), "required field `data` is missing");
}

#[test]
fn from_parts_rejects_absent_name() {
    let err = Contact::from_parts(None, Some("nick".into()), None).unwrap_err();
    assert!(matches!(err, ContactError::MissingRequired("name")));
}

#[test]
fn from_json_accepts_missing_optionals() {
    let contact = Contact::from_json(r#"{"name":"Linus"}"#).unwrap();
    assert_eq!(contact, Contact::new("Linus"));
}

#[test]
fn from_json_accepts_null_optionals() {
    let contact = Contact::from_json(r#"{"name":"Linus","nickname":null,"email":null}"#).unwrap();
    assert_eq!(contact, Contact::new("Linus"));
}

#[yare::parameterized(
    missing = { r#"{"email":"x@example.com"}"# },
    null    = { r#"{"name":null}"# },
    empty   = { "{}" },
)]
fn from_json_rejects_absent_name(json: &str) {
    let err = Contact::from_json(json).unwrap_err();
    assert!(matches!(err, ContactError::MissingRequired("name")), "{err}");
}

#[test]
fn from_json_reports_malformed_input() {
    let err = Contact::from_json("{not json").unwrap_err();
    assert!(matches!(err, ContactError::Json(_)));
}

#[test]
fn serde_deserialize_also_checks_required_name() {
    let err = serde_json::from_str::<Contact>(r#"{"name":null}"#).unwrap_err();
    assert!(err.to_string().contains("required field `name` is missing"));
}

#[test]
fn to_json_skips_absent_optionals() {
    let json = Contact::new("Ken").with_email("ken@example.com").to_json().unwrap();
    assert_eq!(json, r#"{"name":"Ken","email":"ken@example.com"}"#);

    let back = Contact::from_json(&json).unwrap();
    assert_eq!(back.email.as_deref(), Some("ken@example.com"));
    assert!(back.nickname.is_none());
}
