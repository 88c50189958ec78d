use anchor_lang::prelude::*;

use crate::constants::{FOUR_DECIMALS, ONE, SECONDS_PER_YEAR};
use library::math::safe_math::SafeMath;

/// Maps vault utilization to a per-second borrow rate.
pub trait InterestRateModel {
    /// `utilization` is in 1e2 percent (100% = 10_000); the result is a per-second rate in ray.
    fn compute_rate(&self, utilization: u128) -> Result<u128>;
}

/// Converts a yearly rate in 1e2 percent into a per-second ray rate.
pub fn yearly_to_per_second_rate(yearly_rate: u128) -> Result<u128> {
    Ok(yearly_rate
        .safe_mul(ONE)?
        .safe_div(FOUR_DECIMALS)?
        .safe_div(SECONDS_PER_YEAR)?)
}
