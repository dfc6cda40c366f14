//! Core data models for the workers compensation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod body_part;
mod calculation_result;
mod jurisdiction;

pub use body_part::{BodyPartSchedule, BodyPartSummary};
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationRequest, CalculationResult, WEEKS_PER_MONTH,
};
pub use jurisdiction::{JurisdictionRate, JurisdictionSummary};
