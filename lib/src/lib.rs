// lib/src/lib.rs

//! In-memory registry for the medication tracker: the `TrackingSystem`
//! collections, reports, restock randomness, the clock and configuration.

pub mod clock;
pub mod config;
pub mod registry;
pub mod restock;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{load_tracker_config, DeletionPolicy, RestockConfig, TrackerConfig};
pub use registry::{PrescriptionReport, PrescriptionReportLine, RestockEntry, SystemReport, TrackingSystem};
pub use restock::{RestockSource, SeededSource, ThreadRngSource};

// Shared record types, re-exported so callers need only this crate.
pub use models::{
    Assignment, Doctor, EntityKind, Identifier, Medication, Named, Patient, Prescription, Record, TrackingError,
    TrackingResult, ValidationError,
};
