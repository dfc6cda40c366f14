//! Rate comparison across jurisdictions.
//!
//! Filtering, sorting and summary statistics over the rate table, as shown
//! on the state rate reference page.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_whole_currency;
use crate::error::EngineError;
use crate::models::{JurisdictionRate, JurisdictionSummary};

use super::rate_table::RateTable;

/// Jurisdictions featured for their high maximum benefits.
pub const TOP_JURISDICTIONS: [&str; 7] = ["IA", "NH", "IL", "DC", "MA", "WA", "CA"];

/// The column a rate listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    /// Jurisdiction display name.
    #[default]
    Name,
    /// Maximum weekly benefit.
    Max,
    /// Minimum weekly benefit.
    Min,
}

impl SortColumn {
    /// Names ascend by default; benefit columns show the largest first.
    pub fn default_order(self) -> SortOrder {
        match self {
            SortColumn::Name => SortOrder::Asc,
            SortColumn::Max | SortColumn::Min => SortOrder::Desc,
        }
    }

    fn compare(self, a: &JurisdictionRate, b: &JurisdictionRate) -> Ordering {
        match self {
            SortColumn::Name => a.display_name.cmp(&b.display_name),
            SortColumn::Max => a.max_weekly_benefit.cmp(&b.max_weekly_benefit),
            SortColumn::Min => a.min_weekly_benefit.cmp(&b.min_weekly_benefit),
        }
    }
}

impl FromStr for SortColumn {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortColumn::Name),
            "max" => Ok(SortColumn::Max),
            "min" => Ok(SortColumn::Min),
            _ => Err(EngineError::InvalidQuery {
                parameter: "sort".to_string(),
                message: format!("unknown column '{}', expected one of: name, max, min", s),
            }),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortColumn::Name => "name",
            SortColumn::Max => "max",
            SortColumn::Min => "min",
        };
        f.write_str(name)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(EngineError::InvalidQuery {
                parameter: "order".to_string(),
                message: format!("unknown order '{}', expected asc or desc", s),
            }),
        }
    }
}

/// A filtered, sorted view over the rate table.
///
/// # Example
///
/// ```
/// use workers_comp_engine::tables::{RateQuery, SortColumn, rate_table};
///
/// let query = RateQuery::default().sorted_by(SortColumn::Max);
/// let rows = rate_table().query(&query);
/// assert_eq!(rows[0].code, "IA");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateQuery {
    /// Case-insensitive substring matched against name or code.
    pub search: Option<String>,
    /// The column to sort by.
    pub sort_by: SortColumn,
    /// The sort direction.
    pub order: SortOrder,
}

impl RateQuery {
    /// Restricts the listing to jurisdictions matching `search`.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sorts by `column` in that column's default direction.
    pub fn sorted_by(mut self, column: SortColumn) -> Self {
        self.sort_by = column;
        self.order = column.default_order();
        self
    }

    /// Overrides the sort direction.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Mirrors a column-header click: the active column flips direction,
    /// any other column becomes active in its default direction.
    pub fn toggle(self, column: SortColumn) -> Self {
        if self.sort_by == column {
            let order = self.order.toggled();
            self.with_order(order)
        } else {
            self.sorted_by(column)
        }
    }

    fn matches(&self, rate: &JurisdictionRate) -> bool {
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                rate.display_name.to_lowercase().contains(&term)
                    || rate.code.to_lowercase().contains(&term)
            }
        }
    }
}

/// Summary statistics over every jurisdiction's maximum benefit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateStatistics {
    /// The jurisdiction with the highest maximum.
    pub highest_max: JurisdictionSummary,
    /// The jurisdiction with the lowest maximum.
    pub lowest_max: JurisdictionSummary,
    /// Mean maximum, rounded to a whole dollar.
    pub average_max: Decimal,
    /// Number of jurisdictions included.
    pub jurisdiction_count: usize,
}

impl RateTable {
    /// Returns the jurisdictions matching `query`, sorted as requested.
    ///
    /// Sorting is stable and descending order reverses the comparison, so
    /// ties keep declaration order in both directions.
    pub fn query(&self, query: &RateQuery) -> Vec<&JurisdictionRate> {
        let mut rows: Vec<&JurisdictionRate> = self.iter().filter(|r| query.matches(r)).collect();
        rows.sort_by(|a, b| {
            let ordering = query.sort_by.compare(a, b);
            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        rows
    }

    /// Computes statistics over the maximum weekly benefits.
    pub fn statistics(&self) -> RateStatistics {
        let first = self
            .iter()
            .next()
            .unwrap_or_else(|| self.default_jurisdiction());
        let mut highest = first;
        let mut lowest = first;
        let mut total = Decimal::ZERO;

        // Strict comparisons: the earliest declared entry wins ties.
        for rate in self.iter() {
            if rate.max_weekly_benefit > highest.max_weekly_benefit {
                highest = rate;
            }
            if rate.max_weekly_benefit < lowest.max_weekly_benefit {
                lowest = rate;
            }
            total += rate.max_weekly_benefit;
        }

        let count = self.len();
        let average_max = if count == 0 {
            Decimal::ZERO
        } else {
            round_whole_currency(total / Decimal::from(count))
        };

        RateStatistics {
            highest_max: JurisdictionSummary::from(highest),
            lowest_max: JurisdictionSummary::from(lowest),
            average_max,
            jurisdiction_count: count,
        }
    }

    /// Returns the featured high-maximum jurisdictions in display order.
    pub fn top_jurisdictions(&self) -> Vec<&JurisdictionRate> {
        TOP_JURISDICTIONS
            .iter()
            .filter_map(|code| self.get(code))
            .collect()
    }
}
