use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::Timestamp;

/// Externally supplied discrete occurrence (announcement, news, macro release)
///
/// `category` is free-form: categories are defined by whoever supplies the
/// events and the analyzers never branch on specific values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketEvent {
    /// Unique within one analysis run
    pub id: String,
    pub timestamp: Timestamp,
    pub category: String,
    pub description: String,
    /// Where the event was reported (e.g. "Reuters")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Sentiment score in [-1, 1], negative = bearish
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Decimal>,
}

impl MarketEvent {
    /// Create a new event
    pub fn new(
        id: impl Into<String>,
        timestamp: Timestamp,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            category: category.into(),
            description: description.into(),
            source: None,
            sentiment: None,
        }
    }

    /// Builder: Set the reporting source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Builder: Set sentiment (clamped to [-1, 1])
    pub fn with_sentiment(mut self, sentiment: Decimal) -> Self {
        self.sentiment = Some(sentiment.clamp(-Decimal::ONE, Decimal::ONE));
        self
    }
}
