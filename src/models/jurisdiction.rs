//! Jurisdiction rate model.
//!
//! Each jurisdiction carries the statutory parameters used to turn an
//! average weekly wage into a weekly TTD benefit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Benefit parameters for a single jurisdiction.
///
/// # Example
///
/// ```
/// use workers_comp_engine::models::JurisdictionRate;
/// use rust_decimal::Decimal;
///
/// let rate = JurisdictionRate {
///     code: "CA".to_string(),
///     display_name: "California".to_string(),
///     max_weekly_benefit: Decimal::from(1676),
///     min_weekly_benefit: Decimal::from(225),
///     replacement_rate: Decimal::new(6667, 4),
///     waiting_period_days: 3,
///     notes: "66.67% of AWW, high max".to_string(),
/// };
/// assert!(rate.max_weekly_benefit >= rate.min_weekly_benefit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionRate {
    /// Two-letter jurisdiction code (e.g., "CA").
    pub code: String,
    /// Human-readable jurisdiction name.
    pub display_name: String,
    /// Weekly benefit cap.
    pub max_weekly_benefit: Decimal,
    /// Weekly benefit floor.
    pub min_weekly_benefit: Decimal,
    /// Fraction of the average weekly wage paid as benefit.
    pub replacement_rate: Decimal,
    /// Days of disability before benefits accrue.
    pub waiting_period_days: u32,
    /// Free-text annotation; not used in any calculation.
    pub notes: String,
}

/// The compact form of a jurisdiction used for selection lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionSummary {
    /// Two-letter jurisdiction code.
    pub code: String,
    /// Human-readable jurisdiction name.
    pub name: String,
    /// Weekly benefit cap.
    pub max_weekly_benefit: Decimal,
}

impl From<&JurisdictionRate> for JurisdictionSummary {
    fn from(rate: &JurisdictionRate) -> Self {
        Self {
            code: rate.code.clone(),
            name: rate.display_name.clone(),
            max_weekly_benefit: rate.max_weekly_benefit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_rate() -> JurisdictionRate {
        JurisdictionRate {
            code: "TX".to_string(),
            display_name: "Texas".to_string(),
            max_weekly_benefit: Decimal::from(1156),
            min_weekly_benefit: Decimal::from(173),
            replacement_rate: Decimal::new(7, 1),
            waiting_period_days: 7,
            notes: "70% of AWW".to_string(),
        }
    }

    #[test]
    fn test_summary_from_rate_copies_display_fields() {
        let rate = create_test_rate();
        let summary = JurisdictionSummary::from(&rate);

        assert_eq!(summary.code, "TX");
        assert_eq!(summary.name, "Texas");
        assert_eq!(summary.max_weekly_benefit, Decimal::from(1156));
    }

    #[test]
    fn test_rate_serialization_uses_snake_case_fields() {
        let json = serde_json::to_string(&create_test_rate()).unwrap();

        assert!(json.contains("\"code\":\"TX\""));
        assert!(json.contains("\"display_name\":\"Texas\""));
        assert!(json.contains("\"max_weekly_benefit\":\"1156\""));
        assert!(json.contains("\"replacement_rate\":\"0.7\""));
        assert!(json.contains("\"waiting_period_days\":7"));
    }
}
