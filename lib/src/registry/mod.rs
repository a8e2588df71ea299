// lib/src/registry/mod.rs

//! The tracking system: four independently owned collections (patients,
//! doctors, medications, prescriptions) and the operations over them.
//!
//! Nothing in here prints. Every operation returns data, a flag, or a
//! `TrackingError` for the caller to render.

use std::fmt;

use log::{debug, info};
use models::errors::{TrackingError, TrackingResult};
use models::identifiers::Identifier;
use models::medical::{Doctor, EntityKind, Medication, Patient, Prescription};

use crate::clock::{Clock, SystemClock};
use crate::config::{DeletionPolicy, TrackerConfig};
use crate::restock::{RestockSource, ThreadRngSource};

mod collection;
mod doctors;
mod medications;
mod patients;
mod prescriptions;
pub mod reports;

pub use medications::RestockEntry;
pub use reports::{PrescriptionReport, PrescriptionReportLine, SystemReport};

pub struct TrackingSystem {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    medications: Vec<Medication>,
    prescriptions: Vec<Prescription>,
    config: TrackerConfig,
    restock_source: Box<dyn RestockSource>,
    clock: Box<dyn Clock>,
}

impl TrackingSystem {
    /// Creates an empty system with the default configuration, a thread-local
    /// random restock source and the system clock.
    pub fn new() -> Self {
        TrackingSystem {
            patients: Vec::new(),
            doctors: Vec::new(),
            medications: Vec::new(),
            prescriptions: Vec::new(),
            config: TrackerConfig::default(),
            restock_source: Box::new(ThreadRngSource),
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_config(config: TrackerConfig) -> TrackingResult<Self> {
        config.validate()?;
        debug!("Creating tracking system with {:?}", config);
        Ok(TrackingSystem {
            config,
            ..TrackingSystem::new()
        })
    }

    pub fn with_restock_source(mut self, source: impl RestockSource + 'static) -> Self {
        self.restock_source = Box::new(source);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Counts what still points at the record about to be deleted.
    fn count_references(&self, kind: EntityKind, id: &str) -> usize {
        let prescriptions = self
            .prescriptions
            .iter()
            .filter(|p| match kind {
                EntityKind::Patient => p.patient_id().as_str() == id,
                EntityKind::Doctor => p.doctor_id().as_str() == id,
                EntityKind::Medication => p.medication_id().as_str() == id,
                EntityKind::Prescription => false,
            })
            .count();
        let assignments = match kind {
            EntityKind::Patient => self
                .doctors
                .iter()
                .filter(|d| d.assigned_patients().iter().any(|p| p.as_str() == id))
                .count(),
            _ => 0,
        };
        prescriptions + assignments
    }

    /// Runs the configured deletion policy for an existing record. Must be
    /// called before the record itself is removed.
    fn apply_deletion_policy(&mut self, kind: EntityKind, id: &Identifier) -> TrackingResult<()> {
        match self.config.deletion_policy {
            DeletionPolicy::Permissive => Ok(()),
            DeletionPolicy::Restrict => {
                let references = self.count_references(kind, id);
                if references > 0 {
                    return Err(TrackingError::InUse { kind, id: *id, references });
                }
                Ok(())
            }
            DeletionPolicy::Cascade => {
                let before = self.prescriptions.len();
                self.prescriptions.retain(|p| match kind {
                    EntityKind::Patient => p.patient_id() != id,
                    EntityKind::Doctor => p.doctor_id() != id,
                    EntityKind::Medication => p.medication_id() != id,
                    EntityKind::Prescription => true,
                });
                let removed = before - self.prescriptions.len();
                if kind == EntityKind::Patient {
                    for doctor in self.doctors.iter_mut() {
                        doctor.unassign_patient(id);
                    }
                }
                if removed > 0 {
                    info!("Cascade removed {} prescription(s) referencing {} {}", removed, kind, id);
                }
                Ok(())
            }
        }
    }
}

impl Default for TrackingSystem {
    fn default() -> Self {
        TrackingSystem::new()
    }
}

impl fmt::Debug for TrackingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackingSystem")
            .field("patients", &self.patients.len())
            .field("doctors", &self.doctors.len())
            .field("medications", &self.medications.len())
            .field("prescriptions", &self.prescriptions.len())
            .field("config", &self.config)
            .finish()
    }
}
