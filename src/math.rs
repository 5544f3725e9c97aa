//! Numeric demonstrations: a delayed sum and a map/reduce fold.

use tokio::time::sleep;

use crate::constants::SUM_DELAY;

/// Add two numbers after the simulated latency. Infallible.
pub async fn delayed_sum(a: f64, b: f64) -> f64 {
    sleep(SUM_DELAY).await;
    a + b
}

/// Sum of each element squared. Empty input yields 0.
pub fn sum_of_squares(nums: &[f64]) -> f64 {
    nums.iter().map(|n| n * n).sum()
}
