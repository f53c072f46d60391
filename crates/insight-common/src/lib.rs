//! Shared utilities for the insight crates.
//!
//! This crate provides helpers used across the insight workspace:
//! Polars `AnyValue` conversions, row-wise column access and the small text formatting routines
//! the narrative layer relies on.

pub mod anyvalue;
pub mod frame;
pub mod text;

// Re-export commonly used functions at crate root for convenience
pub use anyvalue::{
    any_to_bool, any_to_f64, any_to_i64, any_to_string, format_numeric,
    is_null, parse_f64, parse_i64,
};
pub use frame::{for_each_value, numeric_column_f64, set_i32_column, string_column};
pub use text::{round_to, title_case};
