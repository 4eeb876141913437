//! # Freight Core
//!
//! Core library for the rural freight simulator - an offline record keeper and
//! transport cost estimator for farm logistics.
//!
//! This crate provides the data model, the JSON record store and the
//! estimation logic, independent of the interactive CLI.
//!
//! ## Architecture
//!
//! - **model**: Properties, vehicles, products and stored calculations
//! - **storage**: Record trait, collections and the JSON document store
//! - **registry**: Add/edit/remove/list over one collection with delete blocking
//! - **calculator**: Trip count, distance, duration and cost estimation
//! - **ledger**: Calculation listing with resolved entity names
//! - **export**: Consolidated snapshot of all collections

pub mod calculator;
pub mod error;
pub mod export;
pub mod fs;
pub mod ledger;
pub mod model;
pub mod registry;
pub mod storage;

pub use calculator::{CalculationRequest, CostModel, TransportCalculator, TripEstimate};
pub use error::{FreightError, Result};
pub use export::ExportDocument;
pub use ledger::{CalculationLedger, LedgerEntry};
pub use model::{Calculation, Product, Property, Timestamp, Vehicle};
pub use registry::Registry;
pub use storage::{next_id, Collection, JsonStore, Record};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
