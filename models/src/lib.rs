// models/src/lib.rs

//! Record types shared by the tracking library and the CLI: patients,
//! doctors, medications and prescriptions, plus identifiers, field
//! validation and the error taxonomy.

pub mod errors;
pub mod identifiers;
pub mod medical;
pub mod validation;

pub use errors::{TrackingError, TrackingResult, ValidationError, ValidationResult};
pub use identifiers::Identifier;
pub use medical::{Assignment, Doctor, EntityKind, Medication, Named, Patient, Person, Prescription, Record};
