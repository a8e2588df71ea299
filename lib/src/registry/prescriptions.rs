// lib/src/registry/prescriptions.rs

use log::{info, warn};
use models::errors::{TrackingError, TrackingResult};
use models::medical::{EntityKind, Prescription, Record};

use super::collection::{contains_id, find_by_id, find_by_id_mut, remove_by_id};
use super::TrackingSystem;

impl TrackingSystem {
    /// Stores the prescription once its patient, doctor and medication all
    /// exist. Checked in that order; the first missing one is reported.
    pub fn add_prescription(&mut self, prescription: Prescription) -> TrackingResult<()> {
        let checks = [
            (EntityKind::Patient, prescription.patient_id(), contains_id(&self.patients, prescription.patient_id())),
            (EntityKind::Doctor, prescription.doctor_id(), contains_id(&self.doctors, prescription.doctor_id())),
            (
                EntityKind::Medication,
                prescription.medication_id(),
                contains_id(&self.medications, prescription.medication_id()),
            ),
        ];
        if let Some((kind, id, _)) = checks.iter().find(|(_, _, exists)| !exists) {
            warn!(
                "Refused prescription {}: {} {} does not exist",
                prescription.id(),
                kind,
                id
            );
            return Err(TrackingError::MissingReference { kind: *kind, id: **id });
        }

        if contains_id(&self.prescriptions, prescription.id()) {
            warn!(
                "Prescription ID {} already exists; lookups will resolve to the earlier record",
                prescription.id()
            );
        }
        info!("Added prescription {}", prescription.id());
        self.prescriptions.push(prescription);
        Ok(())
    }

    /// Prescriptions are never referenced, so no deletion policy applies.
    pub fn delete_prescription(&mut self, id: &str) -> bool {
        let removed = remove_by_id(&mut self.prescriptions, id);
        if removed > 0 {
            info!("Deleted {} prescription record(s) with ID {}", removed, id);
        }
        removed > 0
    }

    pub fn prescriptions(&self) -> &[Prescription] {
        &self.prescriptions
    }

    pub fn get_prescription(&self, id: &str) -> Option<&Prescription> {
        find_by_id(&self.prescriptions, id)
    }

    pub fn list_by_patient(&self, patient_id: &str) -> Vec<&Prescription> {
        self.prescriptions
            .iter()
            .filter(|p| p.patient_id().as_str() == patient_id)
            .collect()
    }

    pub fn list_by_doctor(&self, doctor_id: &str) -> Vec<&Prescription> {
        self.prescriptions
            .iter()
            .filter(|p| p.doctor_id().as_str() == doctor_id)
            .collect()
    }

    pub fn edit_prescription(&mut self, id: &str, quantity: i64, instructions: &str) -> TrackingResult<()> {
        let prescription = find_by_id_mut(&mut self.prescriptions, id)
            .ok_or_else(|| TrackingError::not_found(EntityKind::Prescription, id))?;
        prescription.update(quantity, instructions)?;
        info!("Updated prescription {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeletionPolicy;
    use crate::registry::test_support::seeded_system;
    use models::medical::{Doctor, Patient};

    fn rx(id: &str, patient: &str, doctor: &str, medication: &str) -> Prescription {
        Prescription::new(id, patient, doctor, medication, 5, "After meals").unwrap()
    }

    #[test]
    fn should_accept_prescription_with_resolved_references() {
        let system = seeded_system(DeletionPolicy::Permissive);
        assert_eq!(system.prescriptions().len(), 1);
        assert_eq!(system.get_prescription("RX1").unwrap().quantity(), 10);
    }

    #[test]
    fn should_refuse_prescription_naming_first_missing_reference() {
        let mut system = seeded_system(DeletionPolicy::Permissive);

        let err = system.add_prescription(rx("RX2", "P9", "D9", "M9")).unwrap_err();
        assert!(matches!(err, TrackingError::MissingReference { kind: EntityKind::Patient, .. }));

        let err = system.add_prescription(rx("RX2", "P1", "D9", "M1")).unwrap_err();
        assert!(matches!(err, TrackingError::MissingReference { kind: EntityKind::Doctor, .. }));

        let err = system.add_prescription(rx("RX2", "P1", "D1", "M9")).unwrap_err();
        match err {
            TrackingError::MissingReference { kind, id } => {
                assert_eq!(kind, EntityKind::Medication);
                assert_eq!(id, "M9");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(system.prescriptions().len(), 1);
    }

    #[test]
    fn should_filter_by_patient_and_doctor() {
        let mut system = seeded_system(DeletionPolicy::Permissive);
        system.add_patient(Patient::new("P2", "Carl", 50, "555-0102").unwrap());
        system.add_doctor(Doctor::new("D2", "Dana", "Dermatology").unwrap());
        system.add_prescription(rx("RX2", "P2", "D1", "M1")).unwrap();
        system.add_prescription(rx("RX3", "P1", "D2", "M1")).unwrap();

        let by_patient: Vec<&str> = system.list_by_patient("P1").iter().map(|p| p.id().as_str()).collect();
        assert_eq!(by_patient, vec!["RX1", "RX3"]);
        let by_doctor: Vec<&str> = system.list_by_doctor("D1").iter().map(|p| p.id().as_str()).collect();
        assert_eq!(by_doctor, vec!["RX1", "RX2"]);
        assert!(system.list_by_patient("P9").is_empty());
    }

    #[test]
    fn should_edit_and_delete_prescription() {
        let mut system = seeded_system(DeletionPolicy::Permissive);
        system.edit_prescription("RX1", 30, "Twice daily").unwrap();
        let prescription = system.get_prescription("RX1").unwrap();
        assert_eq!(prescription.quantity(), 30);
        assert_eq!(prescription.instructions(), "Twice daily");

        assert!(system.edit_prescription("RX1", 0, "Never").is_err());
        assert_eq!(system.get_prescription("RX1").unwrap().quantity(), 30);
        assert!(system.edit_prescription("RX9", 1, "x").unwrap_err().is_not_found());

        assert!(system.delete_prescription("RX1"));
        assert!(!system.delete_prescription("RX1"));
    }
}
