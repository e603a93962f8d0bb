//! Content identifier type for product and entity references.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`ObjectId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ObjectIdError {
    /// The input is not exactly 24 characters long.
    #[error("object id must be exactly {expected} characters, got {actual}")]
    WrongLength {
        /// Required length.
        expected: usize,
        /// Length of the submitted string.
        actual: usize,
    },
    /// The input contains a character outside `[0-9a-f]`.
    #[error("object id contains an invalid character at position {position}")]
    InvalidCharacter {
        /// Byte offset of the first offending character.
        position: usize,
    },
}

/// A content identifier: 24 lowercase hexadecimal characters.
///
/// Identifiers follow a fixed-width timestamp + machine + counter encoding,
/// but this type only guarantees the canonical textual shape - it never
/// interprets the segments.
///
/// ## Examples
///
/// ```
/// use paloma_core::ObjectId;
///
/// assert!(ObjectId::parse("5a0c96d2ab3f1b0001e4c0f2").is_ok());
///
/// assert!(ObjectId::parse("").is_err());                          // empty
/// assert!(ObjectId::parse("not-a-hex-id").is_err());              // wrong shape
/// assert!(ObjectId::parse("5A0C96D2AB3F1B0001E4C0F2").is_err());  // uppercase
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Length of the canonical encoding.
    pub const LENGTH: usize = 24;

    /// Parse an `ObjectId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 24 characters or contains
    /// anything other than lowercase hex digits.
    pub fn parse(s: &str) -> Result<Self, ObjectIdError> {
        if s.len() != Self::LENGTH {
            return Err(ObjectIdError::WrongLength {
                expected: Self::LENGTH,
                actual: s.len(),
            });
        }

        if let Some(position) = s
            .bytes()
            .position(|b| !matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            return Err(ObjectIdError::InvalidCharacter { position });
        }

        Ok(Self(s.to_owned()))
    }

    /// Whether `s` is a syntactically valid identifier.
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ObjectId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
