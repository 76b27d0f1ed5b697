use serde::{Deserialize, Serialize};

use crate::values::{Price, Timestamp};

/// One timestamped price observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: Timestamp,
    pub value: Price,
}

impl PricePoint {
    pub fn new(timestamp: Timestamp, value: Price) -> Self {
        Self { timestamp, value }
    }
}
