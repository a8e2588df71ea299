// lib/src/registry/medications.rs

use std::fmt;

use log::{info, warn};
use models::errors::{TrackingError, TrackingResult, ValidationError};
use models::identifiers::Identifier;
use models::medical::{EntityKind, Medication, Named, Record};
use serde::Serialize;

use super::collection::{contains_id, find_by_id, find_by_id_mut, remove_by_id, search_by_name};
use super::TrackingSystem;

/// What `restock_all` did to one medication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestockEntry {
    pub id: Identifier,
    pub name: String,
    pub added: u32,
    pub new_quantity: u32,
}

impl fmt::Display for RestockEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Restocked {} by {} units. New total: {}",
            self.name, self.added, self.new_quantity
        )
    }
}

impl TrackingSystem {
    pub fn add_medication(&mut self, medication: Medication) {
        if contains_id(&self.medications, medication.id()) {
            warn!(
                "Medication ID {} already exists; lookups will resolve to the earlier record",
                medication.id()
            );
        }
        info!("Added medication {}", medication.id());
        self.medications.push(medication);
    }

    pub fn delete_medication(&mut self, id: &str) -> TrackingResult<bool> {
        let Some(medication_id) = find_by_id(&self.medications, id).map(|m| *m.id()) else {
            return Ok(false);
        };
        self.apply_deletion_policy(EntityKind::Medication, &medication_id)?;
        let removed = remove_by_id(&mut self.medications, id);
        info!("Deleted {} medication record(s) with ID {}", removed, id);
        Ok(true)
    }

    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    pub fn get_medication(&self, id: &str) -> Option<&Medication> {
        find_by_id(&self.medications, id)
    }

    pub fn search_medications_by_name(&self, query: &str) -> Vec<&Medication> {
        search_by_name(&self.medications, query)
    }

    /// Replaces name, dosage and stock of the first medication with `id`.
    /// The expiry date is left as is.
    pub fn edit_medication(
        &mut self,
        id: &str,
        name: &str,
        dosage_mg: i64,
        quantity_in_stock: i64,
    ) -> TrackingResult<()> {
        let medication = find_by_id_mut(&mut self.medications, id)
            .ok_or_else(|| TrackingError::not_found(EntityKind::Medication, id))?;
        medication.update(name, dosage_mg, quantity_in_stock)?;
        info!("Updated medication {}", id);
        Ok(())
    }

    /// Adds a random amount from the configured range to every medication.
    ///
    /// All amounts are drawn and checked for overflow first, so either every
    /// medication is restocked or none is.
    pub fn restock_all(&mut self) -> TrackingResult<Vec<RestockEntry>> {
        let range = self.config.restock.range();
        let mut amounts = Vec::with_capacity(self.medications.len());
        for medication in &self.medications {
            let amount = self.restock_source.next_amount(range.clone());
            if medication.quantity_in_stock().checked_add(amount).is_none() {
                return Err(ValidationError::OutOfRange {
                    entity: EntityKind::Medication,
                    field: "quantity in stock",
                    value: i64::from(medication.quantity_in_stock()) + i64::from(amount),
                }
                .into());
            }
            amounts.push(amount);
        }

        let mut entries = Vec::with_capacity(amounts.len());
        for (medication, added) in self.medications.iter_mut().zip(amounts) {
            let new_quantity = medication.restock(added)?;
            entries.push(RestockEntry {
                id: *medication.id(),
                name: medication.name().to_string(),
                added,
                new_quantity,
            });
        }
        info!("Restocked {} medication(s)", entries.len());
        Ok(entries)
    }

    /// Medications whose expiry date is before today's date on the clock.
    pub fn list_expired(&self) -> Vec<&Medication> {
        let today = self.clock.today();
        self.medications.iter().filter(|m| m.is_expired_on(today)).collect()
    }
}
