// lib/src/registry/patients.rs

use log::{info, warn};
use models::errors::{TrackingError, TrackingResult};
use models::medical::{EntityKind, Patient, Record};

use super::collection::{contains_id, find_by_id, find_by_id_mut, remove_by_id, search_by_name};
use super::TrackingSystem;

impl TrackingSystem {
    pub fn add_patient(&mut self, patient: Patient) {
        if contains_id(&self.patients, patient.id()) {
            warn!("Patient ID {} already exists; lookups will resolve to the earlier record", patient.id());
        }
        info!("Added patient {}", patient.id());
        self.patients.push(patient);
    }

    /// Removes every patient with `id`. Returns `Ok(false)` when none existed.
    pub fn delete_patient(&mut self, id: &str) -> TrackingResult<bool> {
        let Some(patient_id) = find_by_id(&self.patients, id).map(|p| *p.id()) else {
            return Ok(false);
        };
        self.apply_deletion_policy(EntityKind::Patient, &patient_id)?;
        let removed = remove_by_id(&mut self.patients, id);
        info!("Deleted {} patient record(s) with ID {}", removed, id);
        Ok(true)
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn get_patient(&self, id: &str) -> Option<&Patient> {
        find_by_id(&self.patients, id)
    }

    pub fn search_patients_by_name(&self, query: &str) -> Vec<&Patient> {
        search_by_name(&self.patients, query)
    }

    /// Replaces name, age and phone number of the first patient with `id`.
    /// Nothing changes unless every field is valid.
    pub fn edit_patient(&mut self, id: &str, name: &str, age: i64, phone_number: &str) -> TrackingResult<()> {
        let patient = find_by_id_mut(&mut self.patients, id)
            .ok_or_else(|| TrackingError::not_found(EntityKind::Patient, id))?;
        patient.update(name, age, phone_number)?;
        info!("Updated patient {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ValidationError;
    use models::medical::Named;

    fn system_with_patients() -> TrackingSystem {
        let mut system = TrackingSystem::new();
        system.add_patient(Patient::new("P1", "Alice Smith", 30, "555-0100").unwrap());
        system.add_patient(Patient::new("P2", "Bob Alison", 45, "555-0101").unwrap());
        system
    }

    #[test]
    fn should_add_and_list_patients() {
        let system = system_with_patients();
        let ids: Vec<&str> = system.patients().iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2"]);
        assert_eq!(system.get_patient("P2").unwrap().age(), 45);
        assert!(system.get_patient("P3").is_none());
    }

    #[test]
    fn should_tolerate_duplicate_ids() {
        let mut system = system_with_patients();
        system.add_patient(Patient::new("P1", "Carol", 60, "555-0102").unwrap());
        assert_eq!(system.patients().len(), 3);
        assert_eq!(system.get_patient("P1").unwrap().name(), "Alice Smith");

        assert!(system.delete_patient("P1").unwrap());
        assert_eq!(system.patients().len(), 1);
    }

    #[test]
    fn should_report_missing_patient_on_delete() {
        let mut system = system_with_patients();
        assert!(!system.delete_patient("P9").unwrap());
        assert_eq!(system.patients().len(), 2);
    }

    #[test]
    fn should_search_by_name_case_insensitively() {
        let system = system_with_patients();
        let names: Vec<&str> = system.search_patients_by_name("ALI").iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Alice Smith", "Bob Alison"]);
        assert!(system.search_patients_by_name("zoe").is_empty());
    }

    #[test]
    fn should_edit_patient_in_place() {
        let mut system = system_with_patients();
        system.edit_patient("P1", "Alice Jones", 31, "555-0199").unwrap();
        let patient = system.get_patient("P1").unwrap();
        assert_eq!(patient.name(), "Alice Jones");
        assert_eq!(patient.age(), 31);
        assert_eq!(patient.phone_number(), "555-0199");
    }

    #[test]
    fn should_leave_patient_untouched_on_invalid_edit() {
        let mut system = system_with_patients();
        let err = system.edit_patient("P1", "Alice Jones", -4, "555-0199").unwrap_err();
        assert!(matches!(
            err,
            TrackingError::Validation(ValidationError::NotPositive { field: "age", .. })
        ));
        let patient = system.get_patient("P1").unwrap();
        assert_eq!(patient.name(), "Alice Smith");
        assert_eq!(patient.age(), 30);
    }

    #[test]
    fn should_fail_edit_for_unknown_patient() {
        let mut system = system_with_patients();
        let err = system.edit_patient("P9", "Nobody", 20, "555").unwrap_err();
        assert!(err.is_not_found());
    }
}
