//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce the basic invariants of a persisted teacher (positive
//! identifiers, bounded non-blank names) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest accepted teacher name, in characters.
pub const NAME_MIN_LEN: u64 = 3;
/// Longest accepted teacher name, in characters.
pub const NAME_MAX_LEN: u64 = 512;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string is shorter or longer than allowed.
    #[error("value must be between {min} and {max} characters long")]
    LengthOutOfRange { min: u64, max: u64 },
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(TeacherId, "Unique identifier for a teacher.");

/// First or last name of a teacher: not blank, 3 to 512 characters.
///
/// The value is kept exactly as supplied; surrounding whitespace is not
/// trimmed so what was validated is what gets stored.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct TeacherName(String);

impl TeacherName {
    /// Validates the raw name against the blank and length rules.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        let len = value.chars().count() as u64;
        if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
            return Err(TypeConstraintError::LengthOutOfRange {
                min: NAME_MIN_LEN,
                max: NAME_MAX_LEN,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the name as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for TeacherName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for TeacherName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TeacherName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for TeacherName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeacherName> for String {
    fn from(value: TeacherName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_id_rejects_non_positive_values() {
        assert_eq!(TeacherId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(TeacherId::new(-5), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(TeacherId::new(7).map(TeacherId::get), Ok(7));
    }

    #[test]
    fn teacher_name_accepts_bounds() {
        assert!(TeacherName::new("abc").is_ok());
        assert!(TeacherName::new("a".repeat(512)).is_ok());
    }

    #[test]
    fn teacher_name_rejects_blank_and_out_of_range() {
        assert_eq!(TeacherName::new("   "), Err(TypeConstraintError::EmptyString));
        assert_eq!(
            TeacherName::new("ab"),
            Err(TypeConstraintError::LengthOutOfRange { min: 3, max: 512 })
        );
        assert_eq!(
            TeacherName::new("a".repeat(513)),
            Err(TypeConstraintError::LengthOutOfRange { min: 3, max: 512 })
        );
    }

    #[test]
    fn teacher_name_counts_characters_not_bytes() {
        // Three characters, six bytes.
        assert!(TeacherName::new("Ζωή").is_ok());
        assert!(TeacherName::new("😀😀").is_err());
    }

    #[test]
    fn teacher_name_keeps_surrounding_whitespace() {
        let name = TeacherName::new(" Ann ").expect("valid name");
        assert_eq!(name.as_str(), " Ann ");
    }
}
