//! The benefit calculator.
//!
//! Resolves the jurisdiction and body part, then runs the weekly benefit and
//! settlement steps. The calculator is total: unknown identifiers fall back
//! to defaults and are reported as audit warnings.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{
    AuditStep, AuditTrace, AuditWarning, BodyPartSchedule, CalculationRequest, CalculationResult,
    JurisdictionRate,
};
use crate::tables::{body_part_schedule, rate_table};

use super::settlement::calculate_settlement_range;
use super::weekly_benefit::calculate_weekly_benefit;

/// Calculates the weekly benefit and settlement range for a claim.
///
/// `average_weekly_wage` must already be sanitised; substituting a default
/// for missing input is the caller's job.
///
/// # Examples
///
/// ```
/// use workers_comp_engine::calculation::calculate;
/// use rust_decimal::Decimal;
///
/// let result = calculate("CA", Decimal::from(1200), "back");
/// assert_eq!(result.weekly_benefit, Decimal::from(800));
/// assert!(!result.cap_applied);
/// assert_eq!(result.settlement_low, Decimal::from(252000));
/// assert_eq!(result.settlement_high, Decimal::from(468000));
/// ```
pub fn calculate(
    jurisdiction_code: &str,
    average_weekly_wage: Decimal,
    body_part_id: &str,
) -> CalculationResult {
    let mut trace = AuditTrace::default();
    let mut step_number: u32 = 1;

    let jurisdiction = resolve_jurisdiction(jurisdiction_code, step_number, &mut trace);
    step_number += 1;

    let body_part = resolve_body_part(body_part_id, step_number, &mut trace);
    step_number += 1;

    let benefit = calculate_weekly_benefit(average_weekly_wage, jurisdiction, step_number);
    step_number += benefit.audit_steps.len() as u32;
    trace.steps.extend(benefit.audit_steps);

    if benefit.cap_applied {
        debug!(
            jurisdiction = %jurisdiction.code,
            raw_benefit = %benefit.raw_benefit,
            max = %jurisdiction.max_weekly_benefit,
            "Weekly benefit capped at jurisdiction maximum"
        );
    }
    if benefit.floor_applied {
        debug!(
            jurisdiction = %jurisdiction.code,
            raw_benefit = %benefit.raw_benefit,
            min = %jurisdiction.min_weekly_benefit,
            "Weekly benefit raised to jurisdiction minimum"
        );
    }

    let settlement = calculate_settlement_range(benefit.weekly_benefit, body_part, step_number);
    trace.steps.push(settlement.audit_step);

    CalculationResult {
        jurisdiction_code: jurisdiction.code.clone(),
        jurisdiction_name: jurisdiction.display_name.clone(),
        average_weekly_wage,
        replacement_rate: jurisdiction.replacement_rate,
        weekly_benefit: benefit.weekly_benefit,
        cap_applied: benefit.cap_applied,
        floor_applied: benefit.floor_applied,
        state_max: jurisdiction.max_weekly_benefit,
        body_part_id: body_part.id.clone(),
        body_part_name: body_part.display_name.clone(),
        settlement_low: settlement.low,
        settlement_high: settlement.high,
        weeks_of_benefits: body_part.schedule_weeks,
        waiting_period_days: jurisdiction.waiting_period_days,
        audit_trace: trace,
    }
}

/// Runs [`calculate`] for a [`CalculationRequest`].
pub fn calculate_request(request: &CalculationRequest) -> CalculationResult {
    calculate(
        &request.jurisdiction_code,
        request.average_weekly_wage,
        &request.body_part_id,
    )
}

fn resolve_jurisdiction(
    code: &str,
    step_number: u32,
    trace: &mut AuditTrace,
) -> &'static JurisdictionRate {
    let table = rate_table();
    let known = table.is_known(code);
    let jurisdiction = table.lookup(code);

    if !known {
        debug!(requested = %code, fallback = %jurisdiction.code, "Unknown jurisdiction");
        trace.warnings.push(AuditWarning {
            code: "JURISDICTION_FALLBACK".to_string(),
            message: format!(
                "Jurisdiction '{}' is not recognised; using {} ({})",
                code, jurisdiction.display_name, jurisdiction.code
            ),
            severity: "medium".to_string(),
        });
    }

    trace.steps.push(AuditStep {
        step_number,
        rule_id: "jurisdiction_lookup".to_string(),
        rule_name: "Jurisdiction Lookup".to_string(),
        input: serde_json::json!({ "jurisdiction_code": code }),
        output: serde_json::json!({
            "jurisdiction_code": jurisdiction.code,
            "fallback": !known
        }),
        reasoning: if known {
            format!("Using {} rates", jurisdiction.display_name)
        } else {
            format!(
                "Unknown jurisdiction '{}'; using default {}",
                code, jurisdiction.display_name
            )
        },
    });

    jurisdiction
}

fn resolve_body_part(id: &str, step_number: u32, trace: &mut AuditTrace) -> &'static BodyPartSchedule {
    let schedule = body_part_schedule();
    let known = schedule.is_known(id);
    let body_part = schedule.lookup(id);

    if !known {
        debug!(requested = %id, fallback = %body_part.id, "Unknown body part");
        trace.warnings.push(AuditWarning {
            code: "BODY_PART_FALLBACK".to_string(),
            message: format!(
                "Body part '{}' is not recognised; using the '{}' schedule",
                id, body_part.id
            ),
            severity: "low".to_string(),
        });
    }

    trace.steps.push(AuditStep {
        step_number,
        rule_id: "body_part_lookup".to_string(),
        rule_name: "Body Part Schedule".to_string(),
        input: serde_json::json!({ "body_part": id }),
        output: serde_json::json!({
            "body_part": body_part.id,
            "schedule_weeks": body_part.schedule_weeks,
            "severity_multiplier": body_part.severity_multiplier.to_string(),
            "fallback": !known
        }),
        reasoning: format!(
            "{}: {} weeks x {}",
            body_part.display_name, body_part.schedule_weeks, body_part.severity_multiplier
        ),
    });

    body_part
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Scenario A: ordinary California back claim
    #[test]
    fn test_scenario_a_california_back() {
        let result = calculate("CA", dec("1200"), "back");

        assert_eq!(result.jurisdiction_code, "CA");
        assert_eq!(result.jurisdiction_name, "California");
        assert_eq!(result.average_weekly_wage, dec("1200"));
        assert_eq!(result.weekly_benefit, dec("800"));
        assert!(!result.cap_applied);
        assert_eq!(result.state_max, dec("1676"));
        assert_eq!(result.body_part_id, "back");
        assert_eq!(result.body_part_name, "Back/Spine");
        assert_eq!(result.weeks_of_benefits, 300);
        assert_eq!(result.settlement_low, dec("252000"));
        assert_eq!(result.settlement_high, dec("468000"));
        assert_eq!(result.waiting_period_days, 3);
        assert!(!result.has_warnings());
    }

    /// Scenario B: high wage capped
    #[test]
    fn test_scenario_b_capped() {
        let result = calculate("CA", dec("5000"), "back");

        assert_eq!(result.weekly_benefit, dec("1676"));
        assert!(result.cap_applied);
    }

    /// Scenario C: low wage floored
    #[test]
    fn test_scenario_c_floored() {
        let result = calculate("CA", dec("10"), "back");

        assert_eq!(result.weekly_benefit, dec("225"));
        assert!(result.floor_applied);
        assert!(!result.cap_applied);
    }

    /// Scenario D: zero wage skips the floor
    #[test]
    fn test_scenario_d_zero_wage() {
        let result = calculate("CA", Decimal::ZERO, "back");

        assert_eq!(result.weekly_benefit, Decimal::ZERO);
        assert_eq!(result.settlement_low, Decimal::ZERO);
        assert_eq!(result.settlement_high, Decimal::ZERO);
    }

    #[test]
    fn test_zero_wage_in_high_floor_jurisdiction() {
        // North Dakota has a $600 minimum
        let result = calculate("ND", Decimal::ZERO, "knee");
        assert_eq!(result.weekly_benefit, Decimal::ZERO);

        let result = calculate("ND", dec("1"), "knee");
        assert_eq!(result.weekly_benefit, dec("600"));
    }

    #[test]
    fn test_unknown_jurisdiction_falls_back_to_california() {
        let result = calculate("ZZ", dec("1200"), "back");

        assert_eq!(result.jurisdiction_code, "CA");
        assert_eq!(result.jurisdiction_name, "California");
        assert_eq!(result.weekly_benefit, dec("800"));
        assert_eq!(result.audit_trace.warnings.len(), 1);
        assert_eq!(result.audit_trace.warnings[0].code, "JURISDICTION_FALLBACK");
        assert!(result.audit_trace.warnings[0].message.contains("'ZZ'"));
    }

    #[test]
    fn test_unknown_body_part_falls_back_to_other() {
        let result = calculate("CA", dec("1200"), "elbow");

        assert_eq!(result.body_part_id, "other");
        assert_eq!(result.body_part_name, "Other");
        assert_eq!(result.weeks_of_benefits, 150);
        // 800 x 150 x 1.0 = 120000
        assert_eq!(result.settlement_low, dec("84000"));
        assert_eq!(result.settlement_high, dec("156000"));
        assert_eq!(result.audit_trace.warnings[0].code, "BODY_PART_FALLBACK");
    }

    #[test]
    fn test_jurisdiction_with_higher_replacement_rate() {
        // Iowa pays 80%: 1500 x 0.8 = 1200
        let result = calculate("IA", dec("1500"), "head");

        assert_eq!(result.replacement_rate, dec("0.8"));
        assert_eq!(result.weekly_benefit, dec("1200"));
        // 1200 x 400 x 2.0 = 960000
        assert_eq!(result.settlement_low, dec("672000"));
        assert_eq!(result.settlement_high, dec("1248000"));
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let first = calculate("TX", dec("987.65"), "shoulder");
        let second = calculate("TX", dec("987.65"), "shoulder");

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_calculate_request_matches_calculate() {
        let request = CalculationRequest {
            jurisdiction_code: "NY".to_string(),
            average_weekly_wage: dec("1100"),
            body_part_id: "hand".to_string(),
        };

        assert_eq!(calculate_request(&request), calculate("NY", dec("1100"), "hand"));
    }

    #[test]
    fn test_audit_trace_is_numbered_sequentially() {
        let result = calculate("CA", dec("1200"), "back");

        let numbers: Vec<u32> = result.audit_trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);

        let rules: Vec<&str> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rules,
            vec![
                "jurisdiction_lookup",
                "body_part_lookup",
                "raw_benefit",
                "state_maximum",
                "state_minimum",
                "settlement_range"
            ]
        );
    }
}
