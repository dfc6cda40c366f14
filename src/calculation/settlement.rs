//! Settlement range estimation.
//!
//! Scales a weekly benefit by the body part's schedule of loss and spreads
//! the result symmetrically by a fixed variance.

use rust_decimal::Decimal;

use crate::models::{AuditStep, BodyPartSchedule};

use super::rounding::round_whole_currency;

/// Returns the settlement variance applied either side of the base (30%).
pub fn settlement_variance() -> Decimal {
    Decimal::new(30, 2)
}

/// The result of a settlement estimate, including the audit step.
#[derive(Debug, Clone)]
pub struct SettlementRangeResult {
    /// Unrounded `benefit x weeks x multiplier`.
    pub base: Decimal,
    /// `round(base x (1 - variance))`.
    pub low: Decimal,
    /// `round(base x (1 + variance))`.
    pub high: Decimal,
    /// The audit step recording this estimate.
    pub audit_step: AuditStep,
}

/// Estimates a settlement range for a weekly benefit and injured body part.
///
/// # Examples
///
/// ```
/// use workers_comp_engine::calculation::calculate_settlement_range;
/// use workers_comp_engine::tables::body_part_schedule;
/// use rust_decimal::Decimal;
///
/// let back = body_part_schedule().lookup("back");
/// let result = calculate_settlement_range(Decimal::from(800), back, 4);
/// assert_eq!(result.low, Decimal::from(252000));
/// assert_eq!(result.high, Decimal::from(468000));
/// ```
pub fn calculate_settlement_range(
    weekly_benefit: Decimal,
    body_part: &BodyPartSchedule,
    step_number: u32,
) -> SettlementRangeResult {
    let weeks = Decimal::from(body_part.schedule_weeks);
    let base = weekly_benefit * weeks * body_part.severity_multiplier;

    let variance = settlement_variance();
    let low = round_whole_currency(base * (Decimal::ONE - variance));
    let high = round_whole_currency(base * (Decimal::ONE + variance));

    let audit_step = AuditStep {
        step_number,
        rule_id: "settlement_range".to_string(),
        rule_name: "Settlement Range".to_string(),
        input: serde_json::json!({
            "weekly_benefit": weekly_benefit.to_string(),
            "body_part": body_part.id,
            "schedule_weeks": body_part.schedule_weeks,
            "severity_multiplier": body_part.severity_multiplier.to_string(),
            "variance": variance.normalize().to_string()
        }),
        output: serde_json::json!({
            "base": base.normalize().to_string(),
            "low": low.to_string(),
            "high": high.to_string()
        }),
        reasoning: format!(
            "${} x {} weeks x {} = ${}; +/-{} gives ${} to ${}",
            weekly_benefit,
            body_part.schedule_weeks,
            body_part.severity_multiplier,
            base.normalize(),
            variance.normalize(),
            low,
            high
        ),
    };

    SettlementRangeResult {
        base,
        low,
        high,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn body_part(id: &str, weeks: u32, multiplier: &str) -> BodyPartSchedule {
        BodyPartSchedule {
            id: id.to_string(),
            display_name: id.to_string(),
            schedule_weeks: weeks,
            severity_multiplier: dec(multiplier),
        }
    }

    /// SR-001: back injury at $800/week
    #[test]
    fn test_back_injury_range() {
        let result = calculate_settlement_range(dec("800"), &body_part("back", 300, "1.5"), 1);

        assert_eq!(result.base, dec("360000"));
        assert_eq!(result.low, dec("252000"));
        assert_eq!(result.high, dec("468000"));
    }

    /// SR-002: capped benefit, neck injury
    #[test]
    fn test_neck_injury_at_cap() {
        // 1676 x 250 x 1.4 = 586600
        let result = calculate_settlement_range(dec("1676"), &body_part("neck", 250, "1.4"), 1);

        assert_eq!(result.base, dec("586600"));
        assert_eq!(result.low, dec("410620"));
        assert_eq!(result.high, dec("762580"));
    }

    #[test]
    fn test_bounds_round_independently() {
        // 7 x 150 x 1.1 = 1155; x0.7 = 808.5 -> 809; x1.3 = 1501.5 -> 1502
        let result = calculate_settlement_range(dec("7"), &body_part("wrist", 150, "1.1"), 1);

        assert_eq!(result.low, dec("809"));
        assert_eq!(result.high, dec("1502"));
    }

    #[test]
    fn test_zero_benefit_gives_zero_range() {
        let result = calculate_settlement_range(Decimal::ZERO, &body_part("other", 150, "1.0"), 1);

        assert_eq!(result.low, Decimal::ZERO);
        assert_eq!(result.high, Decimal::ZERO);
    }

    #[test]
    fn test_settlement_variance_is_exactly_0_30() {
        assert_eq!(settlement_variance(), dec("0.3"));
    }

    #[test]
    fn test_audit_step_records_inputs() {
        let result = calculate_settlement_range(dec("800"), &body_part("back", 300, "1.5"), 6);

        assert_eq!(result.audit_step.step_number, 6);
        assert_eq!(result.audit_step.rule_id, "settlement_range");
        assert_eq!(result.audit_step.input["body_part"].as_str().unwrap(), "back");
        assert_eq!(result.audit_step.input["schedule_weeks"].as_u64().unwrap(), 300);
        assert_eq!(result.audit_step.output["low"].as_str().unwrap(), "252000");
        assert!(result.audit_step.reasoning.contains("300 weeks"));
    }
}
