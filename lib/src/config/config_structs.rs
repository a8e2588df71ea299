// lib/src/config/config_structs.rs

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use models::errors::{TrackingError, TrackingResult};

use crate::config::config_defaults::*;

/// What happens to prescriptions and doctor assignments that reference a
/// patient, doctor or medication being deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletionPolicy {
    /// Delete anyway; references are left dangling.
    #[default]
    Permissive,
    /// Refuse to delete while a prescription references the record.
    Restrict,
    /// Delete dependent prescriptions and assignments as well.
    Cascade,
}

impl FromStr for DeletionPolicy {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "permissive" => Ok(DeletionPolicy::Permissive),
            "restrict" => Ok(DeletionPolicy::Restrict),
            "cascade" => Ok(DeletionPolicy::Cascade),
            _ => Err(TrackingError::ConfigurationError(format!(
                "Unsupported deletion policy: {}. Available: permissive, restrict, cascade",
                s
            ))),
        }
    }
}

impl fmt::Display for DeletionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeletionPolicy::Permissive => write!(f, "permissive"),
            DeletionPolicy::Restrict => write!(f, "restrict"),
            DeletionPolicy::Cascade => write!(f, "cascade"),
        }
    }
}

/// Inclusive bounds for the amount added to each medication on restock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockConfig {
    #[serde(default = "default_restock_min")]
    pub min: u32,
    #[serde(default = "default_restock_max")]
    pub max: u32,
}

impl RestockConfig {
    pub fn range(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }
}

impl Default for RestockConfig {
    fn default() -> Self {
        default_restock_config()
    }
}

/// Represents the entire structure of the tracker's TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_restock_config")]
    pub restock: RestockConfig,
    #[serde(default = "default_deletion_policy")]
    pub deletion_policy: DeletionPolicy,
    /// Shown in the prescription report in place of a deleted record's name.
    #[serde(default = "default_unknown_placeholder")]
    pub unknown_placeholder: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            restock: default_restock_config(),
            deletion_policy: default_deletion_policy(),
            unknown_placeholder: default_unknown_placeholder(),
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> TrackingResult<()> {
        if self.restock.min == 0 {
            return Err(TrackingError::ConfigurationError(
                "restock.min must be at least 1 so restocking always adds stock".to_string(),
            ));
        }
        if self.restock.min > self.restock.max {
            return Err(TrackingError::ConfigurationError(format!(
                "restock.min ({}) is greater than restock.max ({})",
                self.restock.min, self.restock.max
            )));
        }
        if self.unknown_placeholder.trim().is_empty() {
            return Err(TrackingError::ConfigurationError(
                "unknown_placeholder cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
