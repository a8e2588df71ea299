// server/src/cli/handlers.rs

// One handler per menu action. Each takes already-collected input, calls
// into the tracking system and returns the text to show. Core errors are
// rendered, never dropped.

use std::fmt::Display;

use chrono::NaiveDate;
use medtrack_lib::{Assignment, Doctor, Medication, Patient, Prescription, TrackingError, TrackingSystem};

const SEPARATOR: &str = "--------------------------------";

fn error_text(e: impl Display) -> String {
    format!("Error: {}", e)
}

fn list_or<T: Display>(items: &[T], empty: impl FnOnce() -> String) -> String {
    if items.is_empty() {
        return empty();
    }
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

fn deletion_text(result: Result<bool, TrackingError>, kind: &str, id: &str) -> String {
    match result {
        Ok(true) => format!("{} deleted successfully!", kind),
        Ok(false) => format!("No {} found with ID: {}", kind.to_lowercase(), id),
        Err(e) => error_text(e),
    }
}

fn edit_text(result: Result<(), TrackingError>, kind: &str) -> String {
    match result {
        Ok(()) => format!("{} details updated successfully!", kind),
        Err(e) => error_text(e),
    }
}

fn prescription_details(prescription: &Prescription) -> String {
    format!(
        "Prescription ID: {}\nPatient ID: {}\nDoctor ID: {}\nMedication ID: {}\nQuantity: {}\nInstructions: {}\n{}",
        prescription.prescription_id(),
        prescription.patient_id(),
        prescription.doctor_id(),
        prescription.medication_id(),
        prescription.quantity(),
        prescription.instructions(),
        SEPARATOR
    )
}

fn prescription_block(header: String, prescriptions: &[&Prescription], empty: String) -> String {
    let mut text = header;
    if prescriptions.is_empty() {
        text.push('\n');
        text.push_str(&empty);
        return text;
    }
    for prescription in prescriptions {
        text.push_str("\n\n");
        text.push_str(&prescription_details(prescription));
    }
    text
}

// Patients

pub fn add_patient(system: &mut TrackingSystem, id: &str, name: &str, age: i64, phone_number: &str) -> String {
    match Patient::new(id, name, age, phone_number) {
        Ok(patient) => {
            system.add_patient(patient);
            "Patient added successfully!".to_string()
        }
        Err(e) => error_text(e),
    }
}

pub fn delete_patient(system: &mut TrackingSystem, id: &str) -> String {
    deletion_text(system.delete_patient(id), "Patient", id)
}

pub fn view_patients(system: &TrackingSystem) -> String {
    list_or(system.patients(), || "No patients found.".to_string())
}

pub fn search_patients(system: &TrackingSystem, name: &str) -> String {
    list_or(&system.search_patients_by_name(name), || {
        format!("No patients found with the name: {}", name)
    })
}

pub fn edit_patient(system: &mut TrackingSystem, id: &str, name: &str, age: i64, phone_number: &str) -> String {
    edit_text(system.edit_patient(id, name, age, phone_number), "Patient")
}

// Doctors

pub fn add_doctor(system: &mut TrackingSystem, id: &str, name: &str, specialization: &str) -> String {
    match Doctor::new(id, name, specialization) {
        Ok(doctor) => {
            system.add_doctor(doctor);
            "Doctor added successfully!".to_string()
        }
        Err(e) => error_text(e),
    }
}

pub fn delete_doctor(system: &mut TrackingSystem, id: &str) -> String {
    deletion_text(system.delete_doctor(id), "Doctor", id)
}

pub fn view_doctors(system: &TrackingSystem) -> String {
    list_or(system.doctors(), || "No doctors found.".to_string())
}

pub fn search_doctors(system: &TrackingSystem, name: &str) -> String {
    list_or(&system.search_doctors_by_name(name), || {
        format!("No doctors found with the name: {}", name)
    })
}

pub fn edit_doctor(system: &mut TrackingSystem, id: &str, name: &str, specialization: &str) -> String {
    edit_text(system.edit_doctor(id, name, specialization), "Doctor")
}

pub fn assign_patient(system: &mut TrackingSystem, doctor_id: &str, patient_id: &str) -> String {
    match system.assign_patient(doctor_id, patient_id) {
        Ok(Assignment::Assigned) => "Patient assigned to doctor successfully!".to_string(),
        Ok(Assignment::AlreadyAssigned) => {
            format!("Patient {} is already assigned to doctor {}.", patient_id, doctor_id)
        }
        Err(e) => error_text(e),
    }
}

pub fn view_assigned_patients(system: &TrackingSystem, doctor_id: &str) -> String {
    match system.assigned_patients(doctor_id) {
        Ok(patients) => list_or(&patients, || format!("No patients assigned to doctor with ID: {}", doctor_id)),
        Err(e) => error_text(e),
    }
}

pub fn prescriptions_by_doctor(system: &TrackingSystem, doctor_id: &str) -> String {
    prescription_block(
        format!("=== Prescriptions by Doctor: {} ===", doctor_id),
        &system.list_by_doctor(doctor_id),
        format!("No prescriptions found for doctor with ID: {}", doctor_id),
    )
}

// Medications

pub fn add_medication(
    system: &mut TrackingSystem,
    id: &str,
    name: &str,
    dosage_mg: i64,
    quantity: i64,
    expiry_date: Option<NaiveDate>,
) -> String {
    match Medication::new(id, name, dosage_mg, quantity, expiry_date) {
        Ok(medication) => {
            system.add_medication(medication);
            "Medication added successfully!".to_string()
        }
        Err(e) => error_text(e),
    }
}

pub fn delete_medication(system: &mut TrackingSystem, id: &str) -> String {
    deletion_text(system.delete_medication(id), "Medication", id)
}

pub fn restock_medications(system: &mut TrackingSystem) -> String {
    match system.restock_all() {
        Ok(entries) if entries.is_empty() => "No medications available to restock.".to_string(),
        Ok(entries) => {
            let mut lines: Vec<String> = entries.iter().map(ToString::to_string).collect();
            lines.push("All medications have been restocked.".to_string());
            lines.join("\n")
        }
        Err(e) => error_text(e),
    }
}

pub fn view_medications(system: &TrackingSystem) -> String {
    list_or(system.medications(), || "No medications found.".to_string())
}

pub fn search_medications(system: &TrackingSystem, name: &str) -> String {
    list_or(&system.search_medications_by_name(name), || {
        format!("No medications found with the name: {}", name)
    })
}

pub fn edit_medication(system: &mut TrackingSystem, id: &str, name: &str, dosage_mg: i64, quantity: i64) -> String {
    edit_text(system.edit_medication(id, name, dosage_mg, quantity), "Medication")
}

pub fn expired_medications(system: &TrackingSystem) -> String {
    let expired = system.list_expired();
    if expired.is_empty() {
        return "No expired medications found.".to_string();
    }
    format!("=== Expired Medications ===\n{}", list_or(&expired, String::new))
}

// Prescriptions

pub fn add_prescription(
    system: &mut TrackingSystem,
    id: &str,
    patient_id: &str,
    doctor_id: &str,
    medication_id: &str,
    quantity: i64,
    instructions: &str,
) -> String {
    let prescription = match Prescription::new(id, patient_id, doctor_id, medication_id, quantity, instructions) {
        Ok(prescription) => prescription,
        Err(e) => return error_text(e),
    };
    match system.add_prescription(prescription) {
        Ok(()) => "Prescription added successfully!".to_string(),
        Err(e) => error_text(e),
    }
}

pub fn delete_prescription(system: &mut TrackingSystem, id: &str) -> String {
    deletion_text(Ok(system.delete_prescription(id)), "Prescription", id)
}

pub fn view_prescriptions(system: &TrackingSystem) -> String {
    let all: Vec<&Prescription> = system.prescriptions().iter().collect();
    prescription_block("=== All Prescriptions ===".to_string(), &all, "No prescriptions found.".to_string())
}

pub fn prescriptions_by_patient(system: &TrackingSystem, patient_id: &str) -> String {
    prescription_block(
        format!("=== Prescriptions for Patient: {} ===", patient_id),
        &system.list_by_patient(patient_id),
        format!("No prescriptions found for patient with ID: {}", patient_id),
    )
}

pub fn edit_prescription(system: &mut TrackingSystem, id: &str, quantity: i64, instructions: &str) -> String {
    edit_text(system.edit_prescription(id, quantity, instructions), "Prescription")
}

// Reports

pub fn system_report(system: &TrackingSystem) -> String {
    system.generate_system_report().to_string()
}

pub fn prescription_report(system: &TrackingSystem) -> String {
    system.generate_prescription_report().to_string()
}

pub fn system_report_json(system: &TrackingSystem) -> String {
    match system.generate_system_report().to_json() {
        Ok(json) => json,
        Err(e) => error_text(e),
    }
}
