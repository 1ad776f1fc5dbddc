//! `pharmadesk-cli`
//!
//! **Responsibility:** the thin reporting surface around the purchasing and
//! inventory rules: environment configuration, JSON input loading, and
//! table/JSON rendering. All arithmetic and classification stays in the
//! domain crates.

pub mod config;
pub mod input;
pub mod report;

pub use config::{Config, ConfigError, OutputFormat};
pub use input::{InventoryRecord, InputError};
pub use report::{ReportError, StockReport, StockRow, TotalsReport};
