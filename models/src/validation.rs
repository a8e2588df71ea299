// models/src/validation.rs

//! Field-level checks shared by entity constructors and setters. Every
//! function returns the value in its stored form so callers can validate all
//! fields first and assign afterwards.

use chrono::NaiveDate;

use crate::errors::{ValidationError, ValidationResult};
use crate::identifiers::Identifier;
use crate::medical::EntityKind;

/// Date format accepted for expiry dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Non-blank text, stored as given.
pub fn require_text(entity: EntityKind, field: &'static str, value: &str) -> ValidationResult<String> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { entity, field });
    }
    Ok(value.to_string())
}

/// Non-blank identifier; a blank one is reported as an empty field.
pub fn require_id(entity: EntityKind, field: &'static str, value: &str) -> ValidationResult<Identifier> {
    Identifier::new(value).map_err(|_| ValidationError::EmptyField { entity, field })
}

/// Strictly positive value that fits in `u32`.
pub fn require_positive(entity: EntityKind, field: &'static str, value: i64) -> ValidationResult<u32> {
    if value <= 0 {
        return Err(ValidationError::NotPositive { entity, field, value });
    }
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange { entity, field, value })
}

/// Zero or positive value that fits in `u32`.
pub fn require_non_negative(entity: EntityKind, field: &'static str, value: i64) -> ValidationResult<u32> {
    if value < 0 {
        return Err(ValidationError::Negative { entity, field, value });
    }
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange { entity, field, value })
}

/// Parses a `yyyy-MM-dd` date.
pub fn parse_date(value: &str) -> ValidationResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDateFormat(value.trim().to_string()))
}
