//! Workers' compensation benefit engine for US jurisdictions.
//!
//! This crate estimates temporary total disability (TTD) benefits and a
//! settlement range from an injured worker's average weekly wage, the
//! jurisdiction's rate table entry and a scheduled body part. Every
//! calculation carries an audit trace of the rules it applied.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use workers_comp_engine::calculation::calculate;
//!
//! let result = calculate("CA", Decimal::from(1200), "back");
//! assert_eq!(result.weekly_benefit, Decimal::from(800));
//! assert!(!result.cap_applied);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod tables;
