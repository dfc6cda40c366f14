//! Body part schedule model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry in the schedule of loss.
///
/// The schedule weeks and severity multiplier together scale a weekly
/// benefit into a settlement estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPartSchedule {
    /// Identifier used by callers (e.g., "back").
    pub id: String,
    /// Human-readable name (e.g., "Back/Spine").
    pub display_name: String,
    /// Weeks of benefit used as the settlement base.
    pub schedule_weeks: u32,
    /// Multiplier applied to the settlement base.
    pub severity_multiplier: Decimal,
}

/// The compact form of a body part used for selection lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPartSummary {
    /// Identifier used by callers.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Weeks of benefit used as the settlement base.
    pub weeks: u32,
}

impl From<&BodyPartSchedule> for BodyPartSummary {
    fn from(schedule: &BodyPartSchedule) -> Self {
        Self {
            id: schedule.id.clone(),
            name: schedule.display_name.clone(),
            weeks: schedule.schedule_weeks,
        }
    }
}
