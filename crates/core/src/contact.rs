// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Contact record with required and optional fields.
//!
//! `name` is required and is a plain `String`; it cannot be absent once a
//! `Contact` exists. Optional fields are `Option`s. Values arriving from
//! outside (JSON, or any source that may hand back nothing) pass through
//! [`require`], which turns an absent required value into
//! [`ContactError::MissingRequired`].

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors from building or decoding a contact
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("required field `{0}` is missing")]
    MissingRequired(&'static str),
    #[error("invalid contact json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Unwrap a value that must be present, naming the field if it is not.
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, ContactError> {
    value.ok_or(ContactError::MissingRequired(field))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Wire shape of a contact where every field may be missing or `null`.
#[derive(Debug, Deserialize)]
struct RawContact {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl<'de> Deserialize<'de> for Contact {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawContact::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nickname: None,
            email: None,
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Nickname if set, otherwise the name.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.name)
    }

    /// Build a contact from values that may each be absent.
    pub fn from_parts(
        name: Option<String>,
        nickname: Option<String>,
        email: Option<String>,
    ) -> Result<Self, ContactError> {
        Self::from_raw(RawContact {
            name,
            nickname,
            email,
        })
    }

    /// Decode a contact from JSON, rejecting a missing or `null` name.
    pub fn from_json(json: &str) -> Result<Self, ContactError> {
        let raw: RawContact = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawContact) -> Result<Self, ContactError> {
        Ok(Self {
            name: require(raw.name, "name")?,
            nickname: raw.nickname,
            email: raw.email,
        })
    }

    pub fn to_json(&self) -> Result<String, ContactError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
#[path = "contact_tests.rs"]
mod tests;
