//! Step-return volatility of a price series

use catalyst_core::PricePoint;
use log::warn;
use rust_decimal::{Decimal, MathematicalOps};

/// Population standard deviation of step-to-step relative returns
///
/// Returns `None` when the series has fewer than two points, its returns
/// do not vary (a zero sigma would qualify every window), or the statistics
/// overflow Decimal's range.
pub fn step_return_volatility(series: &[PricePoint]) -> Option<Decimal> {
    let sigma = population_sigma(series);
    if sigma.is_none() && series.len() >= 2 {
        warn!("Volatility undefined over {} points, volatility mode inactive", series.len());
    }
    sigma.filter(|sigma| !sigma.is_zero())
}

fn population_sigma(series: &[PricePoint]) -> Option<Decimal> {
    let returns = series
        .windows(2)
        .filter(|pair| !pair[0].value.is_zero())
        .map(|pair| {
            pair[1]
                .value
                .checked_sub(pair[0].value)?
                .checked_div(pair[0].value)
        })
        .collect::<Option<Vec<Decimal>>>()?;

    if returns.is_empty() {
        return None;
    }

    let n = Decimal::from(returns.len());
    let mean = checked_sum(returns.iter().copied())?.checked_div(n)?;
    let squares = returns.iter().map(|r| {
        let dev = r.checked_sub(mean)?;
        dev.checked_mul(dev)
    });
    let variance = checked_sum(squares.collect::<Option<Vec<_>>>()?)?.checked_div(n)?;

    variance.sqrt()
}

fn checked_sum(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
}
