//! Export module for TripSplit
//!
//! Provides data export in multiple formats:
//! - CSV: expenses or balances, spreadsheet-compatible
//! - JSON: machine-readable full trip export
//! - YAML: human-readable full trip export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_balances_csv, export_expenses_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
