// models/src/medical/mod.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationResult;
use crate::identifiers::Identifier;
use crate::validation::{require_id, require_text};

pub mod doctor;
pub mod medication;
pub mod patient;
pub mod prescription;

pub use doctor::{Assignment, Doctor};
pub use medication::Medication;
pub use patient::Patient;
pub use prescription::Prescription;

/// The four kinds of record kept by the tracking system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Patient,
    Doctor,
    Medication,
    Prescription,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Patient => write!(f, "Patient"),
            EntityKind::Doctor => write!(f, "Doctor"),
            EntityKind::Medication => write!(f, "Medication"),
            EntityKind::Prescription => write!(f, "Prescription"),
        }
    }
}

/// A record stored in one of the registry collections.
pub trait Record {
    const KIND: EntityKind;

    fn id(&self) -> &Identifier;
}

/// A record that can be searched by name.
pub trait Named: Record {
    fn name(&self) -> &str;

    /// Case-insensitive substring match. An empty query matches nothing.
    fn name_contains(&self, query: &str) -> bool {
        !query.is_empty() && self.name().to_lowercase().contains(&query.to_lowercase())
    }
}

/// Identity shared by patients and doctors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Identifier,
    pub name: String,
}

impl Person {
    pub fn new(kind: EntityKind, id: &str, name: &str) -> ValidationResult<Self> {
        Ok(Person {
            id: require_id(kind, "ID", id)?,
            name: require_text(kind, "name", name)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;

    #[test]
    fn should_build_person() {
        let person = Person::new(EntityKind::Doctor, "D1", "Bob").unwrap();
        assert_eq!(person.id, "D1");
        assert_eq!(person.name, "Bob");
    }

    #[test]
    fn should_reject_person_without_id() {
        assert_eq!(
            Person::new(EntityKind::Patient, "", "Anna").unwrap_err(),
            ValidationError::EmptyField { entity: EntityKind::Patient, field: "ID" }
        );
    }

    #[test]
    fn test_name_contains_is_case_insensitive() {
        let patient = Patient::new("P1", "Anna", 30, "555-0100").unwrap();
        assert!(patient.name_contains("ann"));
        assert!(patient.name_contains("NN"));
        assert!(!patient.name_contains("bob"));
        assert!(!patient.name_contains(""));
    }
}
