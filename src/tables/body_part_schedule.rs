//! Body part schedule of loss.
//!
//! Maps an injury category to the weeks and severity multiplier used for
//! settlement estimates. Unknown ids resolve to the `"other"` entry.

use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{BodyPartSchedule, BodyPartSummary};

/// Id of the schedule entry used when a lookup misses.
pub const FALLBACK_BODY_PART: &str = "other";

/// (id, display name, schedule weeks, severity multiplier in tenths)
const SCHEDULE_ROWS: [(&str, &str, u32, i64); 11] = [
    ("back", "Back/Spine", 300, 15),
    ("neck", "Neck", 250, 14),
    ("shoulder", "Shoulder", 175, 12),
    ("knee", "Knee", 175, 12),
    ("hand", "Hand", 175, 11),
    ("arm", "Arm", 200, 12),
    ("leg", "Leg", 200, 12),
    ("head", "Head/TBI", 400, 20),
    ("wrist", "Wrist", 150, 11),
    ("ankle", "Ankle", 150, 11),
    ("other", "Other", 150, 10),
];

static BODY_PART_SCHEDULE: LazyLock<BodyPartTable> = LazyLock::new(BodyPartTable::build);

/// Returns the process-wide body part schedule.
pub fn body_part_schedule() -> &'static BodyPartTable {
    &BODY_PART_SCHEDULE
}

/// Immutable schedule of loss in declaration order.
#[derive(Debug)]
pub struct BodyPartTable {
    entries: Vec<BodyPartSchedule>,
    fallback_index: usize,
}

impl BodyPartTable {
    fn build() -> Self {
        let entries: Vec<BodyPartSchedule> = SCHEDULE_ROWS
            .iter()
            .map(|&(id, name, weeks, multiplier)| BodyPartSchedule {
                id: id.to_string(),
                display_name: name.to_string(),
                schedule_weeks: weeks,
                severity_multiplier: Decimal::new(multiplier, 1),
            })
            .collect();

        // "other" is always the last row; covered by tests.
        let fallback_index = entries
            .iter()
            .position(|entry| entry.id == FALLBACK_BODY_PART)
            .unwrap_or(entries.len() - 1);

        Self {
            entries,
            fallback_index,
        }
    }

    /// Looks up a body part, falling back to `"other"` on a miss.
    pub fn lookup(&self, id: &str) -> &BodyPartSchedule {
        self.get(id).unwrap_or_else(|| self.fallback())
    }

    /// Looks up a body part without any fallback.
    pub fn get(&self, id: &str) -> Option<&BodyPartSchedule> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Looks up a body part, returning `BodyPartNotFound` on a miss.
    pub fn require(&self, id: &str) -> EngineResult<&BodyPartSchedule> {
        self.get(id).ok_or_else(|| EngineError::BodyPartNotFound { id: id.to_string() })
    }

    /// Returns true if the id is a key in the schedule.
    pub fn is_known(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Returns the `"other"` entry.
    pub fn fallback(&self) -> &BodyPartSchedule {
        &self.entries[self.fallback_index]
    }

    /// Iterates over all entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &BodyPartSchedule> {
        self.entries.iter()
    }

    /// Lists every body part in declaration order, for selection lists.
    pub fn list_all(&self) -> Vec<BodyPartSummary> {
        self.entries.iter().map(BodyPartSummary::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_has_fallback_entry() {
        let fallback = body_part_schedule().fallback();

        assert_eq!(fallback.id, FALLBACK_BODY_PART);
        assert_eq!(fallback.schedule_weeks, 150);
        assert_eq!(fallback.severity_multiplier, Decimal::ONE);
    }

    #[test]
    fn test_lookup_known_body_part() {
        let back = body_part_schedule().lookup("back");

        assert_eq!(back.display_name, "Back/Spine");
        assert_eq!(back.schedule_weeks, 300);
        assert_eq!(back.severity_multiplier, Decimal::new(15, 1));
    }

    #[test]
    fn test_lookup_unknown_body_part_falls_back_to_other() {
        let schedule = body_part_schedule();

        assert_eq!(schedule.lookup("elbow").id, "other");
        assert_eq!(schedule.lookup("").id, "other");
        assert_eq!(schedule.lookup("BACK").id, "other");
    }

    #[test]
    fn test_require_unknown_body_part_returns_error() {
        match body_part_schedule().require("elbow") {
            Err(EngineError::BodyPartNotFound { id }) => assert_eq!(id, "elbow"),
            other => panic!("Expected BodyPartNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_every_entry_is_positive() {
        for entry in body_part_schedule().iter() {
            assert!(entry.schedule_weeks > 0, "{} has zero weeks", entry.id);
            assert!(
                entry.severity_multiplier > Decimal::ZERO,
                "{} has non-positive multiplier",
                entry.id
            );
        }
    }

    #[test]
    fn test_list_all_keeps_declaration_order() {
        let ids: Vec<String> = body_part_schedule()
            .list_all()
            .into_iter()
            .map(|s| s.id)
            .collect();

        assert_eq!(
            ids,
            vec![
                "back", "neck", "shoulder", "knee", "hand", "arm", "leg", "head", "wrist",
                "ankle", "other"
            ]
        );
    }

    #[test]
    fn test_head_injury_has_highest_multiplier() {
        let head = body_part_schedule().lookup("head");

        assert_eq!(head.display_name, "Head/TBI");
        assert_eq!(head.schedule_weeks, 400);
        assert_eq!(head.severity_multiplier, Decimal::from(2));
    }
}
