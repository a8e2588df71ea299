use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationResult;
use crate::identifiers::Identifier;
use crate::medical::{EntityKind, Named, Person, Record};
use crate::validation::require_text;

const KIND: EntityKind = EntityKind::Doctor;

/// Outcome of assigning a patient to a doctor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assignment {
    Assigned,
    AlreadyAssigned,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(flatten)]
    pub person: Person,
    specialization: String,
    assigned_patients: Vec<Identifier>,
}

impl Doctor {
    pub fn new(id: &str, name: &str, specialization: &str) -> ValidationResult<Self> {
        Ok(Doctor {
            person: Person::new(KIND, id, name)?,
            specialization: require_text(KIND, "specialization", specialization)?,
            assigned_patients: Vec::new(),
        })
    }

    pub fn specialization(&self) -> &str {
        &self.specialization
    }

    /// Ids of assigned patients, in assignment order.
    pub fn assigned_patients(&self) -> &[Identifier] {
        &self.assigned_patients
    }

    pub fn is_assigned(&self, patient_id: &Identifier) -> bool {
        self.assigned_patients.contains(patient_id)
    }

    pub fn assign_patient(&mut self, patient_id: Identifier) -> Assignment {
        if self.is_assigned(&patient_id) {
            return Assignment::AlreadyAssigned;
        }
        self.assigned_patients.push(patient_id);
        Assignment::Assigned
    }

    /// Returns true when the patient was on the list.
    pub fn unassign_patient(&mut self, patient_id: &Identifier) -> bool {
        let before = self.assigned_patients.len();
        self.assigned_patients.retain(|id| id != patient_id);
        before != self.assigned_patients.len()
    }

    pub fn set_name(&mut self, name: &str) -> ValidationResult<()> {
        self.person.name = require_text(KIND, "name", name)?;
        Ok(())
    }

    pub fn set_specialization(&mut self, specialization: &str) -> ValidationResult<()> {
        self.specialization = require_text(KIND, "specialization", specialization)?;
        Ok(())
    }

    pub fn update(&mut self, name: &str, specialization: &str) -> ValidationResult<()> {
        let name = require_text(KIND, "name", name)?;
        let specialization = require_text(KIND, "specialization", specialization)?;
        self.person.name = name;
        self.specialization = specialization;
        Ok(())
    }
}

impl Record for Doctor {
    const KIND: EntityKind = KIND;

    fn id(&self) -> &Identifier {
        &self.person.id
    }
}

impl Named for Doctor {
    fn name(&self) -> &str {
        &self.person.name
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Doctor{{id='{}', name='{}', specialization='{}'}}",
            self.person.id, self.person.name, self.specialization
        )
    }
}
