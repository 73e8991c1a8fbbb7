//! Inbound request bodies and the validation shared by them.
//!
//! Both teacher payloads check their names with [`validate_names`], which runs
//! every rule on every field without short-circuiting: an empty name reports
//! [`FieldError::Empty`] and [`FieldError::SizeOutOfRange`] together.

use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::domain::types::{NAME_MAX_LEN, NAME_MIN_LEN, TypeConstraintError};

pub mod teachers;

/// JSON name of the first-name field, used as the validation error key.
pub const FIRST_NAME_FIELD: &str = "firstName";
/// JSON name of the last-name field, used as the validation error key.
pub const LAST_NAME_FIELD: &str = "lastName";

#[derive(Debug, Error)]
/// Errors that can occur when processing request bodies.
pub enum FormError {
    #[error("invalid teacher id")]
    InvalidTeacherId,

    #[error("invalid name: {0}")]
    InvalidName(TypeConstraintError),
}

/// Field-level failure kinds reported by the name validators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// Missing, empty or whitespace-only.
    Empty,
    /// Fewer than 3 or more than 512 characters.
    SizeOutOfRange,
}

impl FieldError {
    /// Code stored in the [`ValidationError`] for this kind.
    pub const fn code(self) -> &'static str {
        match self {
            FieldError::Empty => "empty",
            FieldError::SizeOutOfRange => "size",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "empty" => Some(FieldError::Empty),
            "size" => Some(FieldError::SizeOutOfRange),
            _ => None,
        }
    }

    fn into_error(self) -> ValidationError {
        let mut error = ValidationError::new(self.code());
        if self == FieldError::SizeOutOfRange {
            error.add_param("min".into(), &NAME_MIN_LEN);
            error.add_param("max".into(), &NAME_MAX_LEN);
        }
        error
    }
}

/// Lists the failure kinds recorded for `field`, in the order they were found.
pub fn field_errors(errors: &ValidationErrors, field: &str) -> Vec<FieldError> {
    errors
        .field_errors()
        .get(field)
        .map(|errors| {
            errors
                .iter()
                .filter_map(|error| FieldError::from_code(&error.code))
                .collect()
        })
        .unwrap_or_default()
}

fn check_name(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    let value = value.unwrap_or_default();

    if value.trim().is_empty() {
        errors.add(field, FieldError::Empty.into_error());
    }

    let len = value.chars().count() as u64;
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        errors.add(field, FieldError::SizeOutOfRange.into_error());
    }
}

/// Validates a first/last name pair. `None` stands for a missing or `null`
/// value and is treated like an empty string.
pub fn validate_names(
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_name(&mut errors, FIRST_NAME_FIELD, first_name);
    check_name(&mut errors, LAST_NAME_FIELD, last_name);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
