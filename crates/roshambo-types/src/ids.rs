//! The external player identifier.
//!
//! Player ids are issued by the chat platform and treated as opaque,
//! immutable strings. The newtype keeps them from being mixed up with
//! display names or other strings at compile time, and its ordering is
//! the deterministic tie-break key for the leaderboard.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque, platform-issued player identifier.
///
/// Serde-transparent: a `PlayerId` serializes as a bare JSON string, so
/// it can key the snapshot's id-to-record object directly.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier and return the inner [`String`].
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
