//! Engine configuration, loadable from TOML or JSON.
//!
//! ```toml
//! max_period_days = 365
//!
//! [default_slot_bounds]
//! min_minutes = 30
//! max_minutes = 240
//!
//! [slot_bounds.td]
//! min_minutes = 60
//! max_minutes = 120
//!
//! [compatibility.requirements]
//! seminaire = ["standard", "salle_reunion"]
//! ```
//!
//! Every field is optional; an empty document yields [`EngineConfig::default`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::compatibility::CompatibilityMatrix;
use crate::error::{GuardError, Result};
use crate::period::DEFAULT_MAX_PERIOD_DAYS;
use crate::slot::SlotBounds;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Longest allowed calendar period, in days.
    pub max_period_days: u32,
    /// Duration limits for slots whose activity category has no entry in `slot_bounds`.
    pub default_slot_bounds: SlotBounds,
    /// Per-activity-category duration limits, keyed by lowercase category.
    pub slot_bounds: BTreeMap<String, SlotBounds>,
    pub compatibility: CompatibilityMatrix,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_period_days: DEFAULT_MAX_PERIOD_DAYS,
            default_slot_bounds: SlotBounds::default(),
            slot_bounds: BTreeMap::new(),
            compatibility: CompatibilityMatrix::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validated()
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(s)?;
        config.validated()
    }

    fn validated(mut self) -> Result<Self> {
        self.slot_bounds = std::mem::take(&mut self.slot_bounds)
            .into_iter()
            .map(|(category, bounds)| (category.trim().to_lowercase(), bounds))
            .collect();
        self.validate()?;
        Ok(self)
    }

    /// Reject configurations no slot or period could ever satisfy.
    pub fn validate(&self) -> Result<()> {
        if self.max_period_days == 0 {
            return Err(GuardError::InvalidConfig(
                "max_period_days must be at least 1".to_string(),
            ));
        }
        self.default_slot_bounds.validate()?;
        for (category, bounds) in &self.slot_bounds {
            bounds.validate().map_err(|e| {
                GuardError::InvalidConfig(format!("slot_bounds.{}: {}", category, e))
            })?;
        }
        Ok(())
    }

    /// Duration limits for an activity category, falling back to the defaults.
    pub fn slot_bounds_for(&self, activity_category: Option<&str>) -> SlotBounds {
        activity_category
            .and_then(|c| self.slot_bounds.get(&c.trim().to_lowercase()))
            .copied()
            .unwrap_or(self.default_slot_bounds)
    }
}
