// lib/src/config/config_defaults.rs

use crate::config::config_structs::{DeletionPolicy, RestockConfig};

pub const DEFAULT_RESTOCK_MIN: u32 = 5;
pub const DEFAULT_RESTOCK_MAX: u32 = 15;
pub const DEFAULT_UNKNOWN_PLACEHOLDER: &str = "Unknown";

pub fn default_restock_min() -> u32 { DEFAULT_RESTOCK_MIN }
pub fn default_restock_max() -> u32 { DEFAULT_RESTOCK_MAX }
pub fn default_restock_config() -> RestockConfig {
    RestockConfig {
        min: DEFAULT_RESTOCK_MIN,
        max: DEFAULT_RESTOCK_MAX,
    }
}
pub fn default_deletion_policy() -> DeletionPolicy { DeletionPolicy::Permissive }
pub fn default_unknown_placeholder() -> String { DEFAULT_UNKNOWN_PLACEHOLDER.to_string() }
