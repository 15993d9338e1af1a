//! The schedulable subject (a teacher) as seen by the engine.

use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityWindow;
use crate::workload::WorkloadState;

/// Availability windows and workload of one subject, owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Empty means "available at any time".
    #[serde(default)]
    pub availability: Vec<AvailabilityWindow>,
    /// Absent means "no hours committed, ceiling of zero".
    #[serde(default)]
    pub workload: WorkloadState,
}

impl Subject {
    pub fn new(availability: Vec<AvailabilityWindow>, workload: WorkloadState) -> Self {
        Self {
            availability,
            workload,
        }
    }
}
