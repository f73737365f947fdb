//! Validated text value types shared across the carelog workspace.
//!
//! Each type validates on construction, so holding a value is proof the
//! constraints hold. Deserialization goes through the same constructors.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
    /// The input text exceeded the maximum length for the type
    #[error("Text exceeds maximum length of {max} characters")]
    TooLong { max: usize },
    /// The input text contained a character outside the type's allowed set
    #[error("Text contains characters outside the allowed set")]
    InvalidCharacters,
}

/// A patient's display name.
///
/// Wraps a `String` and ensures it contains at least one non-whitespace
/// character. The input is trimmed of leading and trailing whitespace during
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientName(String);

impl PatientName {
    /// Creates a new `PatientName` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A categorical label for the kind of care administered (e.g. "medication").
///
/// Constraints, checked at construction:
/// - 1–50 characters after trimming
/// - letters, digits, underscores, whitespace, and hyphens only
///
/// The stored value is normalised to lowercase, so equality between two
/// `CareType` values is the case-insensitive comparison of their inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareType(String);

impl CareType {
    /// Maximum number of characters in a care type.
    pub const MAX_LEN: usize = 50;

    /// Creates a new `CareType` from the given input.
    ///
    /// The input is trimmed, validated, and normalised to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty,
    /// `TextError::TooLong` if it exceeds [`CareType::MAX_LEN`] characters, or
    /// `TextError::InvalidCharacters` if it contains anything other than
    /// letters, digits, underscores, whitespace, or hyphens.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(TextError::TooLong { max: Self::MAX_LEN });
        }

        let ok = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_whitespace());
        if !ok {
            return Err(TextError::InvalidCharacters);
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    /// Returns the normalised (lowercase) care type as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-text notes attached to a caring session.
///
/// May be empty; bounded at 200 characters after trimming. Absent input
/// normalises to the empty value via [`Notes::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notes(String);

impl Notes {
    /// Maximum number of characters in a notes value.
    pub const MAX_LEN: usize = 200;

    /// Creates a new `Notes` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::TooLong` if the trimmed input exceeds
    /// [`Notes::MAX_LEN`] characters.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(TextError::TooLong { max: Self::MAX_LEN });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the notes as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the notes are empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

macro_rules! impl_text_traits {
    ($ty:ident) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $ty::new(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

impl_text_traits!(PatientName);
impl_text_traits!(CareType);
impl_text_traits!(Notes);
