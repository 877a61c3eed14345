//! Store-native document identifier

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Length of a document identifier in its hexadecimal form
pub const ID_HEX_LEN: usize = 24;

/// Validated document identifier in the store's native representation:
/// a 24-character lowercase hexadecimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Parse an identifier from its textual form.
    ///
    /// Accepts exactly 24 hex digits; uppercase input is normalized to
    /// lowercase.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() == ID_HEX_LEN && raw.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(Error::invalid_argument(format!(
                "identifier must be {ID_HEX_LEN} hexadecimal characters"
            )))
        }
    }

    /// Generate a fresh identifier, as the store does on insert
    pub fn generate() -> Self {
        let bytes: [u8; ID_HEX_LEN / 2] = rand::random();
        Self(hex::encode(bytes))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
