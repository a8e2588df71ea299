use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationResult;
use crate::identifiers::Identifier;
use crate::medical::{EntityKind, Named, Person, Record};
use crate::validation::{require_positive, require_text};

const KIND: EntityKind = EntityKind::Patient;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(flatten)]
    pub person: Person,
    age: u32,
    phone_number: String,
}

impl Patient {
    /// Builds a patient, rejecting empty text fields and a non-positive age.
    pub fn new(id: &str, name: &str, age: i64, phone_number: &str) -> ValidationResult<Self> {
        Ok(Patient {
            person: Person::new(KIND, id, name)?,
            age: require_positive(KIND, "age", age)?,
            phone_number: require_text(KIND, "phone number", phone_number)?,
        })
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn set_name(&mut self, name: &str) -> ValidationResult<()> {
        self.person.name = require_text(KIND, "name", name)?;
        Ok(())
    }

    pub fn set_age(&mut self, age: i64) -> ValidationResult<()> {
        self.age = require_positive(KIND, "age", age)?;
        Ok(())
    }

    pub fn set_phone_number(&mut self, phone_number: &str) -> ValidationResult<()> {
        self.phone_number = require_text(KIND, "phone number", phone_number)?;
        Ok(())
    }

    /// Replaces every mutable field at once. Nothing changes unless all
    /// values are valid.
    pub fn update(&mut self, name: &str, age: i64, phone_number: &str) -> ValidationResult<()> {
        let name = require_text(KIND, "name", name)?;
        let age = require_positive(KIND, "age", age)?;
        let phone_number = require_text(KIND, "phone number", phone_number)?;
        self.person.name = name;
        self.age = age;
        self.phone_number = phone_number;
        Ok(())
    }
}

impl Record for Patient {
    const KIND: EntityKind = KIND;

    fn id(&self) -> &Identifier {
        &self.person.id
    }
}

impl Named for Patient {
    fn name(&self) -> &str {
        &self.person.name
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Patient{{id='{}', name='{}', age={}, phoneNumber='{}'}}",
            self.person.id, self.person.name, self.age, self.phone_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use proptest::prelude::*;

    #[test]
    fn should_create_patient() {
        let patient = Patient::new("P1", "Alice", 30, "555-0100").unwrap();
        assert_eq!(patient.id(), &Identifier::new("P1").unwrap());
        assert_eq!(patient.name(), "Alice");
        assert_eq!(patient.age(), 30);
        assert_eq!(patient.phone_number(), "555-0100");
    }

    #[test]
    fn should_reject_invalid_fields() {
        assert!(matches!(
            Patient::new("P1", "Alice", 0, "555-0100"),
            Err(ValidationError::NotPositive { field: "age", .. })
        ));
        assert!(matches!(
            Patient::new("P1", "Alice", -4, "555-0100"),
            Err(ValidationError::NotPositive { field: "age", .. })
        ));
        assert!(matches!(
            Patient::new("P1", "", 30, "555-0100"),
            Err(ValidationError::EmptyField { field: "name", .. })
        ));
        assert!(matches!(
            Patient::new("P1", "Alice", 30, "  "),
            Err(ValidationError::EmptyField { field: "phone number", .. })
        ));
    }

    #[test]
    fn should_leave_patient_untouched_on_invalid_update() {
        let mut patient = Patient::new("P1", "Alice", 30, "555-0100").unwrap();
        assert!(patient.update("Alicia", 0, "555-0199").is_err());
        assert_eq!(patient.name(), "Alice");
        assert_eq!(patient.phone_number(), "555-0100");

        patient.update("Alicia", 31, "555-0199").unwrap();
        assert_eq!(patient.name(), "Alicia");
        assert_eq!(patient.age(), 31);
    }

    #[test]
    fn test_setters_validate() {
        let mut patient = Patient::new("P1", "Alice", 30, "555-0100").unwrap();
        assert!(patient.set_age(-1).is_err());
        assert_eq!(patient.age(), 30);
        patient.set_age(45).unwrap();
        patient.set_name("Al").unwrap();
        patient.set_phone_number("555-0111").unwrap();
        assert_eq!(patient.to_string(), "Patient{id='P1', name='Al', age=45, phoneNumber='555-0111'}");
    }

    #[test]
    fn should_serialize_flattened_person() {
        let patient = Patient::new("P1", "Alice", 30, "555-0100").unwrap();
        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json["id"], "P1");
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["age"], 30);
        assert_eq!(json["phone_number"], "555-0100");
    }

    proptest! {
        #[test]
        fn should_keep_any_valid_fields(
            id in "[A-Z][0-9]{1,4}",
            name in "[A-Za-z][A-Za-z ]{0,20}",
            age in 1i64..=150,
            phone in "[0-9]{3}-[0-9]{4}",
        ) {
            let mut patient = Patient::new(&id, &name, age, &phone).unwrap();
            prop_assert_eq!(patient.id().as_str(), id.as_str());
            prop_assert_eq!(patient.name(), name.as_str());
            prop_assert_eq!(i64::from(patient.age()), age);
            prop_assert_eq!(patient.phone_number(), phone.as_str());

            patient.set_age(age + 1).unwrap();
            prop_assert_eq!(i64::from(patient.age()), age + 1);
        }
    }
}
