// server/tests/scripted_session.rs

use medtrack_lib::{SeededSource, TrackingSystem};
use medtrack_server::cli::{ScriptedPrompter, run_session};

fn run(system: &mut TrackingSystem, answers: &[&str]) -> String {
    let mut prompter = ScriptedPrompter::new(answers.iter().copied());
    let mut out = Vec::new();
    run_session(system, &mut prompter, &mut out).unwrap();
    assert_eq!(prompter.remaining(), 0, "session stopped before consuming the script");
    String::from_utf8(out).unwrap()
}

#[test]
fn test_full_session_through_menus() {
    let mut system = TrackingSystem::new().with_restock_source(SeededSource::new(5));
    let output = run(
        &mut system,
        &[
            // Patients: add P1
            "1", "1", "P1", "Alice", "30", "555-0100", "0",
            // Doctors: add D1, assign P1
            "2", "1", "D1", "Bob", "Cardiology", "6", "D1", "P1", "0",
            // Medications: add M1 with a bad date first, then restock
            "3", "1", "M1", "Aspirin", "100", "50", "2030/01/31", "2030-01-31", "3", "0",
            // Prescriptions: one refused, one accepted, then by patient
            "4", "1", "RX0", "P9", "D1", "M1", "5", "Daily",
            "1", "RX1", "P1", "D1", "M1", "10", "Take daily", "4", "P1", "0",
            // Medications: delete M1
            "3", "2", "M1", "0",
            // Reports: prescription report, JSON report
            "5", "2", "3", "0",
            "0",
        ],
    );

    assert!(output.contains("Patient added successfully!"));
    assert!(output.contains("Patient assigned to doctor successfully!"));
    assert!(output.contains("Invalid date format. Please enter a valid date in the format yyyy-mm-dd."));
    assert!(output.contains("All medications have been restocked."));
    assert!(output.contains("Error: Patient with ID P9 does not exist"));
    assert!(output.contains("=== Prescriptions for Patient: P1 ==="));
    assert!(output.contains("Medication deleted successfully!"));
    assert!(output.contains("Medication: Unknown"));
    assert!(output.ends_with("Exiting Medication Tracking System...\n"));

    assert_eq!(system.prescriptions().len(), 1);
    assert_eq!(system.prescriptions()[0].medication_id().as_str(), "M1");
    assert!(system.get_medication("M1").is_none());
}

#[test]
fn test_session_ends_cleanly_on_end_of_input() {
    let mut system = TrackingSystem::new();
    let mut prompter = ScriptedPrompter::new(["2", "1", "D1"]);
    let mut out = Vec::new();
    run_session(&mut system, &mut prompter, &mut out).unwrap();
    assert!(system.doctors().is_empty());
    assert!(String::from_utf8(out).unwrap().ends_with("Exiting Medication Tracking System...\n"));
}
