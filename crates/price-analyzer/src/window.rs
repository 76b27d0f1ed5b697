//! Detection windows over a sorted price series

use catalyst_core::{PricePoint, saturating_add};

use crate::config::WindowSize;

/// Index pairs `(first, last)` of every window over `series`
///
/// `series` must be sorted by timestamp with no duplicate timestamps.
/// A point-count window longer than the series covers the whole series.
/// Span windows that hold a single point are skipped.
pub fn window_bounds(series: &[PricePoint], size: WindowSize) -> Vec<(usize, usize)> {
    if series.len() < 2 {
        return Vec::new();
    }

    match size {
        WindowSize::Points(n) => {
            if series.len() <= n {
                return vec![(0, series.len() - 1)];
            }
            (0..=series.len() - n).map(|first| (first, first + n - 1)).collect()
        }
        WindowSize::Span(span) => (0..series.len() - 1)
            .filter_map(|first| {
                let limit = saturating_add(series[first].timestamp, span);
                let last = series.partition_point(|p| p.timestamp <= limit) - 1;
                (last > first).then_some((first, last))
            })
            .collect(),
    }
}

/// Drop earlier observations that share a timestamp with a later one
pub fn collapse_duplicate_timestamps(prices: &[PricePoint]) -> Vec<PricePoint> {
    let mut series: Vec<PricePoint> = Vec::with_capacity(prices.len());
    for point in prices {
        match series.last_mut() {
            Some(last) if last.timestamp == point.timestamp => *last = *point,
            _ => series.push(*point),
        }
    }
    series
}
