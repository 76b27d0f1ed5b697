//! Catalyst Core Domain
//!
//! Pure domain types shared by the price and event analyzers.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    // Price side
    Direction,
    MagnitudeClass,
    PriceMovement,
    PricePoint,
    // Event side
    Classification,
    ClassificationSummary,
    CorrelationResult,
    MarketEvent,
    rank_by_impact,
};
pub use values::{Price, Timestamp, saturating_add, saturating_sub};
