//! Static reference data for benefit calculations.
//!
//! This module holds the jurisdiction rate table, the body part schedule of
//! loss, and the comparison queries over the rate table. Both tables are
//! built once on first access and never mutated.

mod body_part_schedule;
mod comparison;
mod rate_table;

pub use body_part_schedule::{BodyPartTable, FALLBACK_BODY_PART, body_part_schedule};
pub use comparison::{RateQuery, RateStatistics, SortColumn, SortOrder, TOP_JURISDICTIONS};
pub use rate_table::{DEFAULT_JURISDICTION, JURISDICTION_COUNT, RateTable, rate_table};
