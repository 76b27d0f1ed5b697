//! Event-to-movement matching

use catalyst_core::{PriceMovement, Timestamp, saturating_add, saturating_sub};
use chrono::Duration;

/// A movement inside an event's matching window
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub movement: &'a PriceMovement,
    /// Zero when the event falls inside the movement
    pub distance: Duration,
    /// Length of the window side the movement lies on
    pub window: Duration,
}

/// Movements intersecting `[at - before, at + after]`, nearest first
///
/// `movements` must be sorted by start timestamp. Equal distances keep the
/// earlier movement first.
pub fn candidates<'a>(
    at: Timestamp,
    movements: &'a [PriceMovement],
    before: Duration,
    after: Duration,
) -> Vec<Candidate<'a>> {
    let (from, to) = match_range(at, before, after);

    // Movements starting after `to` can never match
    let upper = movements.partition_point(|m| m.start.timestamp <= to);

    let mut matched: Vec<Candidate<'a>> = movements[..upper]
        .iter()
        .filter(|m| m.intersects(from, to))
        .map(|movement| {
            let window = if movement.end.timestamp < at {
                before
            } else if movement.start.timestamp > at {
                after
            } else {
                before.max(after)
            };
            Candidate {
                movement,
                distance: movement.distance_to(at),
                window,
            }
        })
        .collect();

    matched.sort_by(|a, b| {
        a.distance
            .cmp(&b.distance)
            .then_with(|| a.movement.start.timestamp.cmp(&b.movement.start.timestamp))
            .then_with(|| a.movement.end.timestamp.cmp(&b.movement.end.timestamp))
    });
    matched
}

/// `[at - before, at + after]`, clamped to the representable range
pub fn match_range(at: Timestamp, before: Duration, after: Duration) -> (Timestamp, Timestamp) {
    (saturating_sub(at, before), saturating_add(at, after))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalyst_core::{MagnitudeClass, PricePoint};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn t(minutes: i64) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 11, 4, 12, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    fn movement(from: i64, to: i64) -> PriceMovement {
        PriceMovement::new(
            PricePoint::new(t(from), dec!(100)),
            PricePoint::new(t(to), dec!(120)),
            MagnitudeClass::Major,
        )
    }

    #[test]
    fn test_matches_within_window_nearest_first() {
        let movements = vec![
            movement(-90, -70), // ends 70 min before
            movement(-40, -20), // ends 20 min before
            movement(-5, 5),    // contains the event
            movement(30, 50),   // starts 30 min after
            movement(120, 140), // out of window
        ];

        let matched = candidates(t(0), &movements, Duration::hours(1), Duration::hours(1));

        let distances: Vec<i64> = matched.iter().map(|c| c.distance.num_minutes()).collect();
        assert_eq!(distances, vec![0, 20, 30]);
        assert_eq!(matched[1].window, Duration::hours(1));
    }

    #[test]
    fn test_asymmetric_windows() {
        let movements = vec![movement(-40, -30), movement(30, 40)];

        let matched = candidates(t(0), &movements, Duration::minutes(10), Duration::minutes(45));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].movement.start.timestamp, t(30));
        assert_eq!(matched[0].window, Duration::minutes(45));
    }

    #[test]
    fn test_window_edges_are_inclusive() {
        let movements = vec![movement(-80, -60), movement(60, 80)];

        let matched = candidates(t(0), &movements, Duration::hours(1), Duration::hours(1));
        assert_eq!(matched.len(), 2);
        // equal distances keep the earlier movement first
        assert_eq!(matched[0].movement.start.timestamp, t(-80));
    }

    #[test]
    fn test_windows_past_the_calendar() {
        let movements = vec![movement(-600, -500), movement(30, 50)];
        let huge = Duration::days(200_000_000);

        let matched = candidates(t(0), &movements, huge, huge);
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].window, huge);
    }

    #[test]
    fn test_nothing_nearby() {
        let movements = vec![movement(-600, -500)];

        assert!(candidates(t(0), &movements, Duration::hours(1), Duration::hours(1)).is_empty());
        assert!(candidates(t(0), &[], Duration::hours(1), Duration::hours(1)).is_empty());
    }
}
