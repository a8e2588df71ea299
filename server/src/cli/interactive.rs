// server/src/cli/interactive.rs

// Numbered menu loop for the interactive shell. The main menu dispatches to
// one submenu per record type plus reports; `0` goes back (or exits from the
// main menu) and end of input exits from anywhere.

use std::io::Write;

use anyhow::Result;
use log::debug;
use medtrack_lib::TrackingSystem;

use crate::cli::handlers;
use crate::cli::prompts::{Console, InputClosed, Prompter};

const CHOICE_PROMPT: &str = "Enter your choice (Enter Number): ";
const INVALID_CHOICE: &str = "Invalid choice! Please try again.";

const MAIN_MENU: &str = "\n=== Medication Tracking System ===
Welcome to the Medication Tracking System. Please select a number below:
1. Patients
2. Doctors
3. Medications
4. Prescriptions
5. Reports
0. Exit";

const PATIENT_MENU: &str = "\n=== Patient Management ===
1. Add Patient
2. Delete Patient
3. View All Patients
4. Search Patient by Name
5. Edit Patient
0. Back to Main Menu";

const DOCTOR_MENU: &str = "\n=== Doctor Management ===
1. Add Doctor
2. Delete Doctor
3. View All Doctors
4. Search Doctor by Name
5. Edit Doctor
6. Assign Patient to Doctor
7. List Prescriptions by Doctor
8. View Assigned Patients
0. Back to Main Menu";

const MEDICATION_MENU: &str = "\n=== Medication Management ===
1. Add Medication
2. Delete Medication
3. Restock Medications
4. View All Medications
5. Search Medication by Name
6. Edit Medication
7. Check Expired Medications
0. Back to Main Menu";

const PRESCRIPTION_MENU: &str = "\n=== Prescription Management ===
1. Add Prescription
2. Delete Prescription
3. View All Prescriptions
4. View Prescriptions by Patient
5. Edit Prescription
0. Back to Main Menu";

const REPORT_MENU: &str = "\n=== Report Menu ===
1. System-Wide Report
2. Prescription Report
3. System-Wide Report (JSON)
0. Back to Main Menu";

/// Runs the menu loop until the user exits or input ends.
pub fn run_session(system: &mut TrackingSystem, prompter: &mut dyn Prompter, out: &mut dyn Write) -> Result<()> {
    let mut console = Console::new(prompter, out);
    match main_menu(system, &mut console) {
        Ok(()) => {}
        Err(e) if e.downcast_ref::<InputClosed>().is_some() => debug!("Input closed, leaving session"),
        Err(e) => return Err(e),
    }
    console.say("Exiting Medication Tracking System...")
}

/// Unparseable input counts as an invalid choice.
fn read_choice(console: &mut Console<'_>) -> Result<Option<u32>> {
    Ok(console.text(CHOICE_PROMPT)?.parse::<u32>().ok())
}

fn main_menu(system: &mut TrackingSystem, console: &mut Console<'_>) -> Result<()> {
    loop {
        console.say(MAIN_MENU)?;
        match read_choice(console)? {
            Some(1) => patient_menu(system, console)?,
            Some(2) => doctor_menu(system, console)?,
            Some(3) => medication_menu(system, console)?,
            Some(4) => prescription_menu(system, console)?,
            Some(5) => report_menu(system, console)?,
            Some(0) => return Ok(()),
            _ => console.say(INVALID_CHOICE)?,
        }
    }
}

fn patient_menu(system: &mut TrackingSystem, console: &mut Console<'_>) -> Result<()> {
    loop {
        console.say(PATIENT_MENU)?;
        let output = match read_choice(console)? {
            Some(1) => {
                let id = console.text("Enter Patient ID: ")?;
                let name = console.text("Enter Patient Name: ")?;
                let age = console.int("Enter Patient Age: ", "age")?;
                let phone = console.text("Enter Patient Phone Number: ")?;
                handlers::add_patient(system, &id, &name, age, &phone)
            }
            Some(2) => {
                let id = console.text("Enter Patient ID to delete: ")?;
                handlers::delete_patient(system, &id)
            }
            Some(3) => handlers::view_patients(system),
            Some(4) => {
                let name = console.text("Enter Patient Name to search: ")?;
                handlers::search_patients(system, &name)
            }
            Some(5) => {
                let id = console.text("Enter Patient ID to edit: ")?;
                let name = console.text("Enter New Name: ")?;
                let age = console.int("Enter New Age: ", "age")?;
                let phone = console.text("Enter New Phone Number: ")?;
                handlers::edit_patient(system, &id, &name, age, &phone)
            }
            Some(0) => return Ok(()),
            _ => INVALID_CHOICE.to_string(),
        };
        console.say(&output)?;
    }
}

fn doctor_menu(system: &mut TrackingSystem, console: &mut Console<'_>) -> Result<()> {
    loop {
        console.say(DOCTOR_MENU)?;
        let output = match read_choice(console)? {
            Some(1) => {
                let id = console.text("Enter Doctor ID: ")?;
                let name = console.text("Enter Doctor Name: ")?;
                let specialization = console.text("Enter Doctor Specialization: ")?;
                handlers::add_doctor(system, &id, &name, &specialization)
            }
            Some(2) => {
                let id = console.text("Enter Doctor ID to delete: ")?;
                handlers::delete_doctor(system, &id)
            }
            Some(3) => handlers::view_doctors(system),
            Some(4) => {
                let name = console.text("Enter Doctor Name to search: ")?;
                handlers::search_doctors(system, &name)
            }
            Some(5) => {
                let id = console.text("Enter Doctor ID to edit: ")?;
                let name = console.text("Enter New Name: ")?;
                let specialization = console.text("Enter New Specialization: ")?;
                handlers::edit_doctor(system, &id, &name, &specialization)
            }
            Some(6) => {
                let doctor_id = console.text("Enter Doctor ID: ")?;
                let patient_id = console.text("Enter Patient ID: ")?;
                handlers::assign_patient(system, &doctor_id, &patient_id)
            }
            Some(7) => {
                let doctor_id = console.text("Enter Doctor ID: ")?;
                handlers::prescriptions_by_doctor(system, &doctor_id)
            }
            Some(8) => {
                let doctor_id = console.text("Enter Doctor ID: ")?;
                handlers::view_assigned_patients(system, &doctor_id)
            }
            Some(0) => return Ok(()),
            _ => INVALID_CHOICE.to_string(),
        };
        console.say(&output)?;
    }
}

fn medication_menu(system: &mut TrackingSystem, console: &mut Console<'_>) -> Result<()> {
    loop {
        console.say(MEDICATION_MENU)?;
        let output = match read_choice(console)? {
            Some(1) => {
                let id = console.text("Enter Medication ID: ")?;
                let name = console.text("Enter Medication Name: ")?;
                let dosage = console.int("Enter Dosage (in mg): ", "dosage")?;
                let quantity = console.int("Enter Quantity: ", "quantity")?;
                let expiry = console.optional_date("Enter Expiry Date (yyyy-mm-dd, blank for none): ")?;
                handlers::add_medication(system, &id, &name, dosage, quantity, expiry)
            }
            Some(2) => {
                let id = console.text("Enter Medication ID to delete: ")?;
                handlers::delete_medication(system, &id)
            }
            Some(3) => handlers::restock_medications(system),
            Some(4) => handlers::view_medications(system),
            Some(5) => {
                let name = console.text("Enter Medication Name to search: ")?;
                handlers::search_medications(system, &name)
            }
            Some(6) => {
                let id = console.text("Enter Medication ID to edit: ")?;
                let name = console.text("Enter New Name: ")?;
                let dosage = console.int("Enter New Dosage (in mg): ", "dosage")?;
                let quantity = console.int("Enter New Quantity: ", "quantity")?;
                handlers::edit_medication(system, &id, &name, dosage, quantity)
            }
            Some(7) => handlers::expired_medications(system),
            Some(0) => return Ok(()),
            _ => INVALID_CHOICE.to_string(),
        };
        console.say(&output)?;
    }
}

fn prescription_menu(system: &mut TrackingSystem, console: &mut Console<'_>) -> Result<()> {
    loop {
        console.say(PRESCRIPTION_MENU)?;
        let output = match read_choice(console)? {
            Some(1) => {
                let id = console.text("Enter Prescription ID: ")?;
                let patient_id = console.text("Enter Patient ID: ")?;
                let doctor_id = console.text("Enter Doctor ID: ")?;
                let medication_id = console.text("Enter Medication ID: ")?;
                let quantity = console.int("Enter Quantity: ", "quantity")?;
                let instructions = console.text("Enter Instructions: ")?;
                handlers::add_prescription(system, &id, &patient_id, &doctor_id, &medication_id, quantity, &instructions)
            }
            Some(2) => {
                let id = console.text("Enter Prescription ID to delete: ")?;
                handlers::delete_prescription(system, &id)
            }
            Some(3) => handlers::view_prescriptions(system),
            Some(4) => {
                let patient_id = console.text("Enter Patient ID to view prescriptions: ")?;
                handlers::prescriptions_by_patient(system, &patient_id)
            }
            Some(5) => {
                let id = console.text("Enter Prescription ID to edit: ")?;
                let quantity = console.int("Enter New Quantity: ", "quantity")?;
                let instructions = console.text("Enter New Instructions: ")?;
                handlers::edit_prescription(system, &id, quantity, &instructions)
            }
            Some(0) => return Ok(()),
            _ => INVALID_CHOICE.to_string(),
        };
        console.say(&output)?;
    }
}

fn report_menu(system: &mut TrackingSystem, console: &mut Console<'_>) -> Result<()> {
    loop {
        console.say(REPORT_MENU)?;
        let output = match read_choice(console)? {
            Some(1) => handlers::system_report(system),
            Some(2) => handlers::prescription_report(system),
            Some(3) => handlers::system_report_json(system),
            Some(0) => return Ok(()),
            _ => INVALID_CHOICE.to_string(),
        };
        console.say(&output)?;
    }
}
