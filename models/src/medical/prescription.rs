// models/src/medical/prescription.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationResult;
use crate::identifiers::Identifier;
use crate::medical::{EntityKind, Record};
use crate::validation::{require_id, require_positive, require_text};

const KIND: EntityKind = EntityKind::Prescription;

/// Links a patient, the prescribing doctor and a medication by id. The ids
/// are checked against the registry when the prescription is added, never
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    prescription_id: Identifier,
    patient_id: Identifier,
    doctor_id: Identifier,
    medication_id: Identifier,
    quantity: u32,
    instructions: String,
}

impl Prescription {
    pub fn new(
        prescription_id: &str,
        patient_id: &str,
        doctor_id: &str,
        medication_id: &str,
        quantity: i64,
        instructions: &str,
    ) -> ValidationResult<Self> {
        Ok(Prescription {
            prescription_id: require_id(KIND, "ID", prescription_id)?,
            patient_id: require_id(KIND, "patient ID", patient_id)?,
            doctor_id: require_id(KIND, "doctor ID", doctor_id)?,
            medication_id: require_id(KIND, "medication ID", medication_id)?,
            quantity: require_positive(KIND, "quantity", quantity)?,
            instructions: require_text(KIND, "instructions", instructions)?,
        })
    }

    pub fn prescription_id(&self) -> &Identifier {
        &self.prescription_id
    }

    pub fn patient_id(&self) -> &Identifier {
        &self.patient_id
    }

    pub fn doctor_id(&self) -> &Identifier {
        &self.doctor_id
    }

    pub fn medication_id(&self) -> &Identifier {
        &self.medication_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn set_quantity(&mut self, quantity: i64) -> ValidationResult<()> {
        self.quantity = require_positive(KIND, "quantity", quantity)?;
        Ok(())
    }

    pub fn set_instructions(&mut self, instructions: &str) -> ValidationResult<()> {
        self.instructions = require_text(KIND, "instructions", instructions)?;
        Ok(())
    }

    pub fn update(&mut self, quantity: i64, instructions: &str) -> ValidationResult<()> {
        let quantity = require_positive(KIND, "quantity", quantity)?;
        let instructions = require_text(KIND, "instructions", instructions)?;
        self.quantity = quantity;
        self.instructions = instructions;
        Ok(())
    }
}

impl Record for Prescription {
    const KIND: EntityKind = KIND;

    fn id(&self) -> &Identifier {
        &self.prescription_id
    }
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Prescription{{prescriptionId='{}', patientId='{}', doctorId='{}', medicationId='{}', quantity={}, instructions='{}'}}",
            self.prescription_id, self.patient_id, self.doctor_id, self.medication_id, self.quantity, self.instructions
        )
    }
}
