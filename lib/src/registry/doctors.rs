// lib/src/registry/doctors.rs

use log::{debug, info, warn};
use models::errors::{TrackingError, TrackingResult};
use models::medical::{Assignment, Doctor, EntityKind, Patient, Record};

use super::collection::{contains_id, find_by_id, find_by_id_mut, remove_by_id, search_by_name};
use super::TrackingSystem;

impl TrackingSystem {
    pub fn add_doctor(&mut self, doctor: Doctor) {
        if contains_id(&self.doctors, doctor.id()) {
            warn!("Doctor ID {} already exists; lookups will resolve to the earlier record", doctor.id());
        }
        info!("Added doctor {}", doctor.id());
        self.doctors.push(doctor);
    }

    pub fn delete_doctor(&mut self, id: &str) -> TrackingResult<bool> {
        let Some(doctor_id) = find_by_id(&self.doctors, id).map(|d| *d.id()) else {
            return Ok(false);
        };
        self.apply_deletion_policy(EntityKind::Doctor, &doctor_id)?;
        let removed = remove_by_id(&mut self.doctors, id);
        info!("Deleted {} doctor record(s) with ID {}", removed, id);
        Ok(true)
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn get_doctor(&self, id: &str) -> Option<&Doctor> {
        find_by_id(&self.doctors, id)
    }

    pub fn search_doctors_by_name(&self, query: &str) -> Vec<&Doctor> {
        search_by_name(&self.doctors, query)
    }

    pub fn edit_doctor(&mut self, id: &str, name: &str, specialization: &str) -> TrackingResult<()> {
        let doctor = find_by_id_mut(&mut self.doctors, id)
            .ok_or_else(|| TrackingError::not_found(EntityKind::Doctor, id))?;
        doctor.update(name, specialization)?;
        info!("Updated doctor {}", id);
        Ok(())
    }

    /// Adds the patient to the doctor's list. The doctor is resolved first,
    /// so an error names whichever side is missing first.
    pub fn assign_patient(&mut self, doctor_id: &str, patient_id: &str) -> TrackingResult<Assignment> {
        if !contains_id(&self.doctors, doctor_id) {
            return Err(TrackingError::not_found(EntityKind::Doctor, doctor_id));
        }
        let patient_id = find_by_id(&self.patients, patient_id)
            .map(|p| *p.id())
            .ok_or_else(|| TrackingError::not_found(EntityKind::Patient, patient_id))?;

        let doctor = find_by_id_mut(&mut self.doctors, doctor_id)
            .ok_or_else(|| TrackingError::not_found(EntityKind::Doctor, doctor_id))?;
        let outcome = doctor.assign_patient(patient_id);
        match outcome {
            Assignment::Assigned => info!("Assigned patient {} to doctor {}", patient_id, doctor_id),
            Assignment::AlreadyAssigned => {
                debug!("Patient {} is already assigned to doctor {}", patient_id, doctor_id)
            }
        }
        Ok(outcome)
    }

    /// Patients on the doctor's list that still exist, in assignment order.
    pub fn assigned_patients(&self, doctor_id: &str) -> TrackingResult<Vec<&Patient>> {
        let doctor = self
            .get_doctor(doctor_id)
            .ok_or_else(|| TrackingError::not_found(EntityKind::Doctor, doctor_id))?;
        Ok(doctor
            .assigned_patients()
            .iter()
            .filter_map(|id| find_by_id(&self.patients, id))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ValidationError;
    use models::medical::Named;

    fn system_with_doctors() -> TrackingSystem {
        let mut system = TrackingSystem::new();
        system.add_doctor(Doctor::new("D1", "Robert Hale", "Oncology").unwrap());
        system.add_doctor(Doctor::new("D2", "Roberta Kim", "Cardiology").unwrap());
        system.add_patient(Patient::new("P1", "Alice", 30, "555-0100").unwrap());
        system.add_patient(Patient::new("P2", "Bruno", 41, "555-0101").unwrap());
        system
    }

    #[test]
    fn should_search_doctors_by_name() {
        let system = system_with_doctors();
        assert_eq!(system.search_doctors_by_name("robert").len(), 2);
        assert_eq!(system.search_doctors_by_name("KIM")[0].id().as_str(), "D2");
        assert!(system.search_doctors_by_name("").is_empty());
    }

    #[test]
    fn should_edit_doctor_atomically() {
        let mut system = system_with_doctors();
        system.edit_doctor("D1", "Rob Hale", "Neurology").unwrap();
        assert_eq!(system.get_doctor("D1").unwrap().specialization(), "Neurology");

        let err = system.edit_doctor("D1", "Robert", " ").unwrap_err();
        assert!(matches!(
            err,
            TrackingError::Validation(ValidationError::EmptyField { field: "specialization", .. })
        ));
        assert_eq!(system.get_doctor("D1").unwrap().name(), "Rob Hale");
        assert!(system.edit_doctor("D7", "X", "Y").unwrap_err().is_not_found());
    }

    #[test]
    fn should_assign_patient_once() {
        let mut system = system_with_doctors();
        assert_eq!(system.assign_patient("D1", "P1").unwrap(), Assignment::Assigned);
        assert_eq!(system.assign_patient("D1", "P1").unwrap(), Assignment::AlreadyAssigned);
        assert_eq!(system.assign_patient("D1", "P2").unwrap(), Assignment::Assigned);

        let names: Vec<&str> = system.assigned_patients("D1").unwrap().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Alice", "Bruno"]);
        assert!(system.assigned_patients("D2").unwrap().is_empty());
    }

    #[test]
    fn should_name_missing_side_of_assignment() {
        let mut system = system_with_doctors();
        assert!(matches!(
            system.assign_patient("D9", "P9"),
            Err(TrackingError::NotFound { kind: EntityKind::Doctor, .. })
        ));
        assert!(matches!(
            system.assign_patient("D1", "P9"),
            Err(TrackingError::NotFound { kind: EntityKind::Patient, .. })
        ));
        assert!(system.get_doctor("D1").unwrap().assigned_patients().is_empty());
        assert!(system.assigned_patients("D9").unwrap_err().is_not_found());
    }

    #[test]
    fn should_delete_doctor() {
        let mut system = system_with_doctors();
        assert!(system.delete_doctor("D2").unwrap());
        assert!(!system.delete_doctor("D2").unwrap());
        assert_eq!(system.doctors().len(), 1);
    }
}
