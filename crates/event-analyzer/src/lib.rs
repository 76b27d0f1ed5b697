//! Catalyst Event Analyzer
//!
//! Attributes detected price movements to market events:
//!
//! - **Matching**: every movement intersecting
//!   `[event - window_before, event + window_after]` is a candidate, nearest
//!   first
//! - **Scoring**: magnitude weight × decay(distance), summed per event and
//!   capped at 1
//! - **Classification**: correlated / weak / uncorrelated by score thresholds
//!
//! ## Architecture
//!
//! ```text
//! MarketEvent[] ─┐
//!                ├──► matcher ──► scorer ──► classifier ──► CorrelationResult[]
//! PriceMovement[]┘                  │
//!                                   └── ScoreDecay (catalyst-decay)
//! ```
//!
//! Every input event yields exactly one result, in input order.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalyst_event_analyzer::{EventAnalyzer, EventAnalyzerConfig};
//!
//! let config = EventAnalyzerConfig {
//!     window_before: Duration::hours(1),
//!     window_after: Duration::hours(1),
//!     ..Default::default()
//! };
//! let results = EventAnalyzer::new(config)?.analyze(&events, &movements)?;
//! ```

pub mod analyzer;
pub mod config;
pub mod matcher;
pub mod scorer;

// Re-export main types
pub use analyzer::{EventAnalyzer, analyze};
pub use config::{EventAnalyzerConfig, MagnitudeWeights};
pub use matcher::Candidate;
pub use scorer::ImpactScorer;

// Re-export decay configuration for convenience
pub use catalyst_decay::DecayKind;
