use chrono::Duration;
use rust_decimal::Decimal;

/// Port for score decay functions
///
/// Maps the time distance between an event and a movement to a weight in
/// `[0, 1]`. Implementations must:
/// - return `1` at zero distance
/// - return `0` once `distance` exceeds `window`
/// - never increase as `distance` grows
/// - never decrease as `window` grows
pub trait ScoreDecay: Send + Sync {
    /// Weight of a match `distance` away, inside a window of length `window`
    fn weight(&self, distance: Duration, window: Duration) -> Decimal;

    /// Get the name of the decay function
    fn name(&self) -> &str;
}
