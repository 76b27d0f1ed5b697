mod classification;
mod correlation;
mod direction;
mod magnitude;
mod market_event;
mod price_movement;
mod price_point;

pub use classification::{Classification, ClassificationSummary};
pub use correlation::{CorrelationResult, rank_by_impact};
pub use direction::Direction;
pub use magnitude::MagnitudeClass;
pub use market_event::MarketEvent;
pub use price_movement::PriceMovement;
pub use price_point::PricePoint;
