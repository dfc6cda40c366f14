//! Weekly TTD benefit calculation.
//!
//! Applies the jurisdiction's replacement rate to the average weekly wage,
//! then its maximum and minimum weekly benefit.

use rust_decimal::Decimal;

use crate::models::{AuditStep, JurisdictionRate};

use super::rounding::round_whole_currency;

/// The result of a weekly benefit calculation, including audit steps.
#[derive(Debug, Clone)]
pub struct WeeklyBenefitResult {
    /// Wage times replacement rate, rounded, before the cap and floor.
    pub raw_benefit: Decimal,
    /// The benefit after the cap and floor.
    pub weekly_benefit: Decimal,
    /// True when the raw benefit exceeded the jurisdiction maximum.
    pub cap_applied: bool,
    /// True when the benefit was raised to the jurisdiction minimum.
    pub floor_applied: bool,
    /// Audit steps for the raw benefit, cap and floor decisions.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the weekly TTD benefit for a wage in a jurisdiction.
///
/// The steps are:
/// 1. `round(wage x replacement_rate)`, ties away from zero
/// 2. clip to the jurisdiction maximum, flagging `cap_applied`
/// 3. raise to the jurisdiction minimum, but only for a positive wage
///
/// A zero wage therefore yields a zero benefit whatever the minimum is.
///
/// # Examples
///
/// ```
/// use workers_comp_engine::calculation::calculate_weekly_benefit;
/// use workers_comp_engine::tables::rate_table;
/// use rust_decimal::Decimal;
///
/// let california = rate_table().lookup("CA");
/// let result = calculate_weekly_benefit(Decimal::from(5000), california, 1);
/// assert_eq!(result.raw_benefit, Decimal::from(3334));
/// assert_eq!(result.weekly_benefit, Decimal::from(1676));
/// assert!(result.cap_applied);
/// ```
pub fn calculate_weekly_benefit(
    average_weekly_wage: Decimal,
    jurisdiction: &JurisdictionRate,
    step_number: u32,
) -> WeeklyBenefitResult {
    let mut audit_steps = Vec::with_capacity(3);

    let raw_benefit = round_whole_currency(average_weekly_wage * jurisdiction.replacement_rate);
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "raw_benefit".to_string(),
        rule_name: "Raw Weekly Benefit".to_string(),
        input: serde_json::json!({
            "average_weekly_wage": average_weekly_wage.to_string(),
            "replacement_rate": jurisdiction.replacement_rate.to_string()
        }),
        output: serde_json::json!({
            "raw_benefit": raw_benefit.to_string()
        }),
        reasoning: format!(
            "round(${} x {}) = ${}",
            average_weekly_wage, jurisdiction.replacement_rate, raw_benefit
        ),
    });

    let max = jurisdiction.max_weekly_benefit;
    let cap_applied = raw_benefit > max;
    let mut weekly_benefit = if cap_applied { max } else { raw_benefit };
    audit_steps.push(AuditStep {
        step_number: step_number + 1,
        rule_id: "state_maximum".to_string(),
        rule_name: "State Maximum".to_string(),
        input: serde_json::json!({
            "benefit": raw_benefit.to_string(),
            "max_weekly_benefit": max.to_string()
        }),
        output: serde_json::json!({
            "benefit": weekly_benefit.to_string(),
            "cap_applied": cap_applied
        }),
        reasoning: if cap_applied {
            format!(
                "${} exceeds the {} maximum of ${}; capped",
                raw_benefit, jurisdiction.code, max
            )
        } else {
            format!(
                "${} is within the {} maximum of ${}",
                raw_benefit, jurisdiction.code, max
            )
        },
    });

    let min = jurisdiction.min_weekly_benefit;
    let below_min = weekly_benefit < min;
    let floor_applied = below_min && average_weekly_wage > Decimal::ZERO;
    let before_floor = weekly_benefit;
    if floor_applied {
        weekly_benefit = min;
    }
    audit_steps.push(AuditStep {
        step_number: step_number + 2,
        rule_id: "state_minimum".to_string(),
        rule_name: "State Minimum".to_string(),
        input: serde_json::json!({
            "benefit": before_floor.to_string(),
            "min_weekly_benefit": min.to_string(),
            "average_weekly_wage": average_weekly_wage.to_string()
        }),
        output: serde_json::json!({
            "benefit": weekly_benefit.to_string(),
            "floor_applied": floor_applied
        }),
        reasoning: if floor_applied {
            format!(
                "${} is below the {} minimum of ${}; raised",
                before_floor, jurisdiction.code, min
            )
        } else if below_min {
            "No minimum applied - average weekly wage is not above zero".to_string()
        } else {
            format!(
                "${} meets the {} minimum of ${}",
                before_floor, jurisdiction.code, min
            )
        },
    });

    WeeklyBenefitResult {
        raw_benefit,
        weekly_benefit,
        cap_applied,
        floor_applied,
        audit_steps,
    }
}
