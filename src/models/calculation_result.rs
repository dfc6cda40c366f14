//! Calculation request and result models.
//!
//! This module contains the [`CalculationResult`] type and the audit
//! structures that record each decision the calculator made. Nothing in a
//! result depends on the clock or on randomness, so identical requests
//! always produce equal results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of weeks used to express a weekly benefit as a monthly figure.
pub const WEEKS_PER_MONTH: u32 = 4;

/// Input to a benefit calculation.
///
/// Identifiers may be unrecognised; the calculator falls back to defaults.
/// The wage is expected to be already sanitised by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The jurisdiction code (e.g., "CA").
    pub jurisdiction_code: String,
    /// The average weekly wage before injury.
    pub average_weekly_wage: Decimal,
    /// The injured body part id (e.g., "back").
    pub body_part_id: String,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag fallbacks that did not prevent the calculation but that a
/// caller may want to surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The result of a benefit calculation.
///
/// # Example
///
/// ```
/// use workers_comp_engine::models::{AuditTrace, CalculationResult};
/// use rust_decimal::Decimal;
///
/// let result = CalculationResult {
///     jurisdiction_code: "CA".to_string(),
///     jurisdiction_name: "California".to_string(),
///     average_weekly_wage: Decimal::from(1200),
///     replacement_rate: Decimal::new(6667, 4),
///     weekly_benefit: Decimal::from(800),
///     cap_applied: false,
///     floor_applied: false,
///     state_max: Decimal::from(1676),
///     body_part_id: "back".to_string(),
///     body_part_name: "Back/Spine".to_string(),
///     settlement_low: Decimal::from(252000),
///     settlement_high: Decimal::from(468000),
///     weeks_of_benefits: 300,
///     waiting_period_days: 3,
///     audit_trace: AuditTrace::default(),
/// };
/// assert_eq!(result.monthly_benefit(), Decimal::from(3200));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Code of the jurisdiction actually used.
    pub jurisdiction_code: String,
    /// Name of the jurisdiction actually used.
    pub jurisdiction_name: String,
    /// The wage the calculation was run with.
    pub average_weekly_wage: Decimal,
    /// The jurisdiction's replacement rate.
    pub replacement_rate: Decimal,
    /// Weekly TTD benefit after the cap and floor.
    pub weekly_benefit: Decimal,
    /// True when the benefit was clipped to the jurisdiction maximum.
    pub cap_applied: bool,
    /// True when the benefit was raised to the jurisdiction minimum.
    pub floor_applied: bool,
    /// The jurisdiction maximum used for the cap.
    pub state_max: Decimal,
    /// Id of the body part schedule actually used.
    pub body_part_id: String,
    /// Name of the body part schedule actually used.
    pub body_part_name: String,
    /// Low end of the settlement estimate.
    pub settlement_low: Decimal,
    /// High end of the settlement estimate.
    pub settlement_high: Decimal,
    /// Schedule weeks used for the settlement base.
    pub weeks_of_benefits: u32,
    /// The jurisdiction's waiting period in days.
    pub waiting_period_days: u32,
    /// Audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl CalculationResult {
    /// Returns the weekly benefit over a four-week month.
    pub fn monthly_benefit(&self) -> Decimal {
        self.weekly_benefit * Decimal::from(WEEKS_PER_MONTH)
    }

    /// Returns true if any fallback was taken while resolving the request.
    pub fn has_warnings(&self) -> bool {
        !self.audit_trace.warnings.is_empty()
    }
}
