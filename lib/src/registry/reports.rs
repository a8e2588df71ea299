// lib/src/registry/reports.rs

//! Whole-system and per-prescription reports. Both are plain values with a
//! `Display` rendering; the system report also serializes to JSON.

use std::fmt;

use log::debug;
use models::errors::{TrackingError, TrackingResult};
use models::identifiers::Identifier;
use models::medical::{Doctor, Medication, Named, Patient, Prescription, Record};
use serde::Serialize;

use super::collection::find_by_id;
use super::TrackingSystem;

const SEPARATOR: &str = "--------------------------------";

/// A snapshot of all four collections, in report order.
#[derive(Debug, Serialize)]
pub struct SystemReport<'a> {
    pub patients: &'a [Patient],
    pub doctors: &'a [Doctor],
    pub medications: &'a [Medication],
    pub prescriptions: &'a [Prescription],
}

impl SystemReport<'_> {
    pub fn to_json(&self) -> TrackingResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TrackingError::SerializationError(format!("Failed to serialize system report: {}", e)))
    }
}

fn write_section<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    empty: &str,
    items: &[T],
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "=== All {} ===", title)?;
    if items.is_empty() {
        return writeln!(f, "No {} found.", empty);
    }
    for item in items {
        writeln!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for SystemReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== System-WIDE Report ===")?;
        write_section(f, "Patients", "patients", self.patients)?;
        write_section(f, "Doctors", "doctors", self.doctors)?;
        write_section(f, "Medications", "medications", self.medications)?;
        write_section(f, "Prescriptions", "prescriptions", self.prescriptions)?;
        writeln!(f)?;
        write!(f, "=== End of Report ===")
    }
}

/// One prescription with its references resolved to display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrescriptionReportLine {
    pub prescription_id: Identifier,
    pub patient: String,
    pub doctor: String,
    pub medication: String,
    pub quantity: u32,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrescriptionReport {
    pub lines: Vec<PrescriptionReportLine>,
}

impl fmt::Display for PrescriptionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "=== All Prescriptions ===")?;
        if self.lines.is_empty() {
            return write!(f, "\nNo prescriptions found.");
        }
        for line in &self.lines {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "Patient: {}", line.patient)?;
            writeln!(f, "Doctor: {}", line.doctor)?;
            writeln!(f, "Medication: {}", line.medication)?;
            writeln!(f, "Quantity: {}", line.quantity)?;
            writeln!(f, "Instructions: {}", line.instructions)?;
            write!(f, "{}", SEPARATOR)?;
        }
        Ok(())
    }
}

fn display_name<T: Named>(items: &[T], id: &str, placeholder: &str) -> String {
    find_by_id(items, id)
        .map(|item| item.name().to_string())
        .unwrap_or_else(|| placeholder.to_string())
}

impl TrackingSystem {
    pub fn generate_system_report(&self) -> SystemReport<'_> {
        debug!("Generating system report for {:?}", self);
        SystemReport {
            patients: &self.patients,
            doctors: &self.doctors,
            medications: &self.medications,
            prescriptions: &self.prescriptions,
        }
    }

    /// Names missing from the registry are replaced by the configured placeholder.
    pub fn generate_prescription_report(&self) -> PrescriptionReport {
        let placeholder = self.config.unknown_placeholder.as_str();
        let lines = self
            .prescriptions
            .iter()
            .map(|p| PrescriptionReportLine {
                prescription_id: *p.id(),
                patient: display_name(&self.patients, p.patient_id(), placeholder),
                doctor: display_name(&self.doctors, p.doctor_id(), placeholder),
                medication: display_name(&self.medications, p.medication_id(), placeholder),
                quantity: p.quantity(),
                instructions: p.instructions().to_string(),
            })
            .collect();
        PrescriptionReport { lines }
    }
}
