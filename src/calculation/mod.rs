//! Calculation logic for the workers compensation engine.
//!
//! This module contains the benefit calculator and its steps: currency
//! rounding, the weekly TTD benefit with the jurisdiction cap and floor, and
//! the settlement range estimate driven by the body part schedule.

mod calculator;
mod rounding;
mod settlement;
mod weekly_benefit;

pub use calculator::{calculate, calculate_request};
pub use rounding::round_whole_currency;
pub use settlement::{SettlementRangeResult, calculate_settlement_range, settlement_variance};
pub use weekly_benefit::{WeeklyBenefitResult, calculate_weekly_benefit};
