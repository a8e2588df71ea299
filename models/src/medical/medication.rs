// medication.rs
use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};
use crate::identifiers::Identifier;
use crate::medical::{EntityKind, Named, Record};
use crate::validation::{require_id, require_non_negative, require_positive, require_text, DATE_FORMAT};

const KIND: EntityKind = EntityKind::Medication;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    id: Identifier,
    name: String,
    dosage_mg: u32,
    quantity_in_stock: u32,
    expiry_date: Option<NaiveDate>,
}

impl Medication {
    /// Builds a medication. `dosage_mg` must be positive and
    /// `quantity_in_stock` must not be negative.
    pub fn new(
        id: &str,
        name: &str,
        dosage_mg: i64,
        quantity_in_stock: i64,
        expiry_date: Option<NaiveDate>,
    ) -> ValidationResult<Self> {
        Ok(Medication {
            id: require_id(KIND, "ID", id)?,
            name: require_text(KIND, "name", name)?,
            dosage_mg: require_positive(KIND, "dosage", dosage_mg)?,
            quantity_in_stock: require_non_negative(KIND, "quantity in stock", quantity_in_stock)?,
            expiry_date,
        })
    }

    pub fn dosage_mg(&self) -> u32 {
        self.dosage_mg
    }

    pub fn quantity_in_stock(&self) -> u32 {
        self.quantity_in_stock
    }

    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry_date
    }

    /// Expired when the expiry date is strictly before today's local date.
    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Local::now().date_naive())
    }

    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expiry_date.is_some_and(|expiry| expiry < today)
    }

    pub fn set_name(&mut self, name: &str) -> ValidationResult<()> {
        self.name = require_text(KIND, "name", name)?;
        Ok(())
    }

    pub fn set_dosage_mg(&mut self, dosage_mg: i64) -> ValidationResult<()> {
        self.dosage_mg = require_positive(KIND, "dosage", dosage_mg)?;
        Ok(())
    }

    pub fn set_quantity_in_stock(&mut self, quantity: i64) -> ValidationResult<()> {
        self.quantity_in_stock = require_non_negative(KIND, "quantity in stock", quantity)?;
        Ok(())
    }

    pub fn set_expiry_date(&mut self, expiry_date: Option<NaiveDate>) {
        self.expiry_date = expiry_date;
    }

    pub fn update(&mut self, name: &str, dosage_mg: i64, quantity_in_stock: i64) -> ValidationResult<()> {
        let name = require_text(KIND, "name", name)?;
        let dosage_mg = require_positive(KIND, "dosage", dosage_mg)?;
        let quantity_in_stock = require_non_negative(KIND, "quantity in stock", quantity_in_stock)?;
        self.name = name;
        self.dosage_mg = dosage_mg;
        self.quantity_in_stock = quantity_in_stock;
        Ok(())
    }

    /// Adds `amount` units and returns the new stock level.
    pub fn restock(&mut self, amount: u32) -> ValidationResult<u32> {
        let total = self.quantity_in_stock.checked_add(amount).ok_or(ValidationError::OutOfRange {
            entity: KIND,
            field: "quantity in stock",
            value: i64::from(self.quantity_in_stock) + i64::from(amount),
        })?;
        self.quantity_in_stock = total;
        Ok(total)
    }
}

impl Record for Medication {
    const KIND: EntityKind = KIND;

    fn id(&self) -> &Identifier {
        &self.id
    }
}

impl Named for Medication {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Medication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Medication{{id='{}', name='{}', dosage={}mg, quantityInStock={}, expiryDate=",
            self.id, self.name, self.dosage_mg, self.quantity_in_stock
        )?;
        match self.expiry_date {
            Some(date) => write!(f, "{}}}", date.format(DATE_FORMAT)),
            None => write!(f, "none}}"),
        }
    }
}
