//! Jurisdiction rate table.
//!
//! The table is compiled into the binary and built once on first access.
//! Lookups by code are total: unknown codes resolve to the default
//! jurisdiction instead of failing.

use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{JurisdictionRate, JurisdictionSummary};

/// Code of the jurisdiction used when a lookup misses.
pub const DEFAULT_JURISDICTION: &str = "CA";

/// Number of jurisdictions in the table (50 states plus DC).
pub const JURISDICTION_COUNT: usize = 51;

/// Scale of the replacement rates stored in [`RATE_ROWS`] (ten-thousandths).
const REPLACEMENT_RATE_SCALE: u32 = 4;

struct RateRow {
    code: &'static str,
    name: &'static str,
    max_weekly: u32,
    min_weekly: u32,
    replacement_rate: u32,
    waiting_period_days: u32,
    notes: &'static str,
}

const fn row(
    code: &'static str,
    name: &'static str,
    max_weekly: u32,
    min_weekly: u32,
    replacement_rate: u32,
    waiting_period_days: u32,
    notes: &'static str,
) -> RateRow {
    RateRow {
        code,
        name,
        max_weekly,
        min_weekly,
        replacement_rate,
        waiting_period_days,
        notes,
    }
}

// 2026 maximum and minimum weekly benefits, sourced from state agencies.
const RATE_ROWS: [RateRow; JURISDICTION_COUNT] = [
    row("AL", "Alabama", 1135, 275, 6667, 3, "66.67% of AWW"),
    row("AK", "Alaska", 1588, 298, 8000, 3, "80% of spendable earnings"),
    row("AZ", "Arizona", 1211, 0, 6667, 7, "66.67% of AWW"),
    row("AR", "Arkansas", 790, 20, 6667, 7, "66.67% of AWW"),
    row("CA", "California", 1676, 225, 6667, 3, "66.67% of AWW, high max"),
    row("CO", "Colorado", 1272, 318, 6667, 3, "66.67% of AWW"),
    row("CT", "Connecticut", 1636, 327, 7500, 3, "75% of AWW"),
    row("DE", "Delaware", 893, 267, 6667, 3, "66.67% of AWW"),
    row("FL", "Florida", 1197, 20, 6667, 7, "66.67% of AWW"),
    row("GA", "Georgia", 800, 50, 6667, 7, "66.67% of AWW"),
    row("HI", "Hawaii", 1188, 297, 6667, 3, "66.67% of AWW"),
    row("ID", "Idaho", 873, 291, 6667, 5, "67% of AWW"),
    row("IL", "Illinois", 1910, 286, 6667, 3, "66.67% of AWW, high max"),
    row("IN", "Indiana", 918, 50, 6667, 7, "66.67% of AWW"),
    row("IA", "Iowa", 2047, 307, 8000, 3, "80% spendable, high max"),
    row("KS", "Kansas", 771, 25, 6667, 7, "66.67% of AWW"),
    row("KY", "Kentucky", 1036, 206, 6667, 7, "66.67% of AWW"),
    row("LA", "Louisiana", 806, 201, 6667, 7, "66.67% of AWW"),
    row("ME", "Maine", 1135, 227, 8000, 7, "80% of AWW"),
    row("MD", "Maryland", 1252, 50, 6667, 3, "66.67% of AWW"),
    row("MA", "Massachusetts", 1796, 359, 6000, 5, "60% of AWW"),
    row("MI", "Michigan", 1155, 346, 8000, 7, "80% spendable"),
    row("MN", "Minnesota", 1374, 173, 6667, 3, "66.67% of AWW"),
    row("MS", "Mississippi", 603, 25, 6667, 5, "66.67% of AWW, low max"),
    row("MO", "Missouri", 1138, 40, 6667, 3, "66.67% of AWW"),
    row("MT", "Montana", 889, 356, 6667, 5, "66.67% of AWW"),
    row("NE", "Nebraska", 1092, 72, 6667, 7, "66.67% of AWW"),
    row("NV", "Nevada", 1119, 280, 6667, 5, "66.67% of AWW"),
    row("NH", "New Hampshire", 1973, 394, 6000, 3, "60% of AWW, high max"),
    row("NJ", "New Jersey", 1099, 275, 7000, 7, "70% of AWW"),
    row("NM", "New Mexico", 978, 102, 6667, 7, "66.67% of AWW"),
    row("NY", "New York", 1145, 275, 6667, 7, "66.67% of AWW"),
    row("NC", "North Carolina", 1254, 30, 6667, 7, "66.67% of AWW"),
    row("ND", "North Dakota", 1288, 600, 6667, 5, "66.67% of AWW"),
    row("OH", "Ohio", 1170, 293, 6667, 7, "66.67% of AWW"),
    row("OK", "Oklahoma", 1035, 172, 7000, 3, "70% of AWW"),
    row("OR", "Oregon", 1517, 379, 6667, 3, "66.67% of AWW"),
    row("PA", "Pennsylvania", 1325, 331, 6667, 7, "66.67% of AWW"),
    row("RI", "Rhode Island", 1226, 184, 7500, 3, "75% of AWW"),
    row("SC", "South Carolina", 1006, 75, 6667, 7, "66.67% of AWW"),
    row("SD", "South Dakota", 989, 494, 6667, 7, "66.67% of AWW"),
    row("TN", "Tennessee", 1238, 185, 6667, 7, "66.67% of AWW"),
    row("TX", "Texas", 1156, 173, 7000, 7, "70% of AWW"),
    row("UT", "Utah", 1121, 72, 6667, 3, "66.67% of AWW"),
    row("VT", "Vermont", 1337, 267, 6667, 3, "66.67% of AWW"),
    row("VA", "Virginia", 1347, 337, 6667, 7, "66.67% of AWW"),
    row("WA", "Washington", 1765, 353, 6000, 3, "60-75% of wage, state fund"),
    row("WV", "West Virginia", 1052, 263, 6667, 3, "66.67% of AWW"),
    row("WI", "Wisconsin", 1233, 370, 6667, 3, "66.67% of AWW"),
    row("WY", "Wyoming", 1044, 522, 6667, 3, "66.67% of AWW"),
    row("DC", "Washington DC", 1807, 451, 6667, 3, "66.67% of AWW, high max"),
];

static RATE_TABLE: LazyLock<RateTable> = LazyLock::new(RateTable::build);

/// Returns the process-wide rate table.
pub fn rate_table() -> &'static RateTable {
    &RATE_TABLE
}

/// Immutable mapping from jurisdiction code to benefit parameters.
///
/// Entries keep their declaration order; the code index is built alongside.
///
/// # Example
///
/// ```
/// use workers_comp_engine::tables::rate_table;
///
/// let table = rate_table();
/// assert_eq!(table.lookup("NY").display_name, "New York");
/// assert_eq!(table.lookup("ZZ").code, "CA");
/// ```
#[derive(Debug)]
pub struct RateTable {
    entries: Vec<JurisdictionRate>,
    index: HashMap<String, usize>,
    default_index: usize,
}

impl RateTable {
    fn build() -> Self {
        let entries: Vec<JurisdictionRate> = RATE_ROWS
            .iter()
            .map(|row| JurisdictionRate {
                code: row.code.to_string(),
                display_name: row.name.to_string(),
                max_weekly_benefit: Decimal::from(row.max_weekly),
                min_weekly_benefit: Decimal::from(row.min_weekly),
                replacement_rate: Decimal::new(
                    i64::from(row.replacement_rate),
                    REPLACEMENT_RATE_SCALE,
                )
                .normalize(),
                waiting_period_days: row.waiting_period_days,
                notes: row.notes.to_string(),
            })
            .collect();

        let index: HashMap<String, usize> = entries
            .iter()
            .enumerate()
            .map(|(i, rate)| (rate.code.clone(), i))
            .collect();

        // CA is always present in RATE_ROWS; covered by tests.
        let default_index = index.get(DEFAULT_JURISDICTION).copied().unwrap_or(0);

        Self {
            entries,
            index,
            default_index,
        }
    }

    /// Looks up a jurisdiction, falling back to the default on a miss.
    pub fn lookup(&self, code: &str) -> &JurisdictionRate {
        self.get(code).unwrap_or_else(|| self.default_jurisdiction())
    }

    /// Looks up a jurisdiction without any fallback.
    pub fn get(&self, code: &str) -> Option<&JurisdictionRate> {
        self.index.get(code).map(|&i| &self.entries[i])
    }

    /// Looks up a jurisdiction, returning `JurisdictionNotFound` on a miss.
    pub fn require(&self, code: &str) -> EngineResult<&JurisdictionRate> {
        self.get(code)
            .ok_or_else(|| EngineError::JurisdictionNotFound {
                code: code.to_string(),
            })
    }

    /// Returns true if the code is a key in the table.
    pub fn is_known(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Returns the jurisdiction used for unrecognised codes.
    pub fn default_jurisdiction(&self) -> &JurisdictionRate {
        &self.entries[self.default_index]
    }

    /// Iterates over all jurisdictions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &JurisdictionRate> {
        self.entries.iter()
    }

    /// Returns the number of jurisdictions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lists every jurisdiction sorted by name, for selection lists.
    pub fn list_all(&self) -> Vec<JurisdictionSummary> {
        let mut summaries: Vec<JurisdictionSummary> =
            self.entries.iter().map(JurisdictionSummary::from).collect();
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        summaries
    }
}
