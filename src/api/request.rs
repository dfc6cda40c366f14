//! Request types for the benefit API.
//!
//! This is the boundary where free-text input is sanitised and defaults are
//! substituted, so the calculator only ever sees clean numeric input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CalculatorDefaults;
use crate::error::EngineResult;
use crate::format::parse_formatted_number;
use crate::models::CalculationRequest;
use crate::tables::{RateQuery, SortColumn, SortOrder};

/// A wage as submitted: either free text from a form field or a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WageInput {
    /// Free text such as `"$1,200"`; every non-digit is stripped.
    Text(String),
    /// A numeric amount.
    Amount(Decimal),
}

impl WageInput {
    /// Sanitises the wage; anything unusable becomes zero.
    pub fn sanitize(&self) -> Decimal {
        match self {
            WageInput::Text(text) => parse_formatted_number(text),
            WageInput::Amount(amount) => (*amount).max(Decimal::ZERO),
        }
    }
}

/// Request body for the `/calculate` endpoint.
///
/// Every field is optional; omitted values take the configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// The jurisdiction code (e.g., "CA").
    #[serde(default)]
    pub jurisdiction: Option<String>,
    /// The average weekly wage, as text or a number.
    #[serde(default)]
    pub weekly_wage: Option<WageInput>,
    /// The injured body part id (e.g., "back").
    #[serde(default)]
    pub body_part: Option<String>,
}

impl EstimateRequest {
    /// Resolves the request into calculator input.
    ///
    /// A wage that sanitises to zero, or is missing, is replaced by the
    /// default wage.
    pub fn resolve(self, defaults: &CalculatorDefaults) -> CalculationRequest {
        let wage = self
            .weekly_wage
            .as_ref()
            .map(WageInput::sanitize)
            .unwrap_or(Decimal::ZERO);
        let average_weekly_wage = if wage.is_zero() {
            defaults.default_weekly_wage
        } else {
            wage
        };

        CalculationRequest {
            jurisdiction_code: self
                .jurisdiction
                .unwrap_or_else(|| defaults.default_jurisdiction.clone()),
            average_weekly_wage,
            body_part_id: self
                .body_part
                .unwrap_or_else(|| defaults.default_body_part.clone()),
        }
    }
}

/// Query parameters for the `/jurisdictions` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RatesQueryParams {
    /// Case-insensitive substring matched against name or code.
    pub search: Option<String>,
    /// Column to sort by: `name`, `max` or `min`.
    pub sort: Option<String>,
    /// Sort direction: `asc` or `desc`.
    pub order: Option<String>,
}

impl RatesQueryParams {
    /// Parses the parameters into a [`RateQuery`].
    pub fn into_query(self) -> EngineResult<RateQuery> {
        let mut query = RateQuery::default();

        if let Some(sort) = self.sort.as_deref() {
            query = query.sorted_by(sort.parse::<SortColumn>()?);
        }
        if let Some(order) = self.order.as_deref() {
            query = query.with_order(order.parse::<SortOrder>()?);
        }
        if let Some(search) = self.search {
            query = query.with_search(search);
        }

        Ok(query)
    }
}
