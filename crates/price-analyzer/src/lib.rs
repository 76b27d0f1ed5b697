//! Catalyst Price Analyzer
//!
//! Scans an ordered price series and emits the significant price movements
//! found in it:
//!
//! - **Windowing**: fixed point-count or fixed time-span windows slide over
//!   the series
//! - **Detection**: a window qualifies on absolute delta, percent delta, or
//!   (optionally) a multiple of the series' step-return volatility
//! - **Classification**: minor / significant / major by percent delta
//! - **Merging**: overlapping same-direction movements collapse into the
//!   largest one
//!
//! ## Architecture
//!
//! ```text
//! PricePoint[] ──► validate ──► collapse duplicate timestamps
//!                                      │
//!                                      ▼
//!                        windows ──► thresholds ──► candidates
//!                                                       │
//!                                                       ▼
//!                                      merge overlapping ──► PriceMovement[]
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalyst_price_analyzer::{PriceAnalyzer, PriceAnalyzerConfig, WindowSize};
//!
//! let config = PriceAnalyzerConfig {
//!     min_percent_delta: Some(dec!(0.1)),
//!     window_size: WindowSize::Points(2),
//!     ..Default::default()
//! };
//! let movements = PriceAnalyzer::new(config)?.analyze(&prices)?;
//! ```

pub mod analyzer;
pub mod config;
pub mod merge;
pub mod volatility;
pub mod window;

// Re-export main types
pub use analyzer::{PriceAnalyzer, analyze};
pub use config::{MagnitudeThresholds, PriceAnalyzerConfig, WindowSize};
