use anchor_lang::prelude::*;

use crate::state::{yearly_to_per_second_rate, InterestRateModel};

/// Constant yearly rate, independent of utilization.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedRateModel {
    /// in 1e2 percent: 100% = 10_000; 1% = 100
    pub yearly_rate: u128,
}

impl FixedRateModel {
    pub fn new(yearly_rate: u128) -> Self {
        Self { yearly_rate }
    }
}

impl InterestRateModel for FixedRateModel {
    fn compute_rate(&self, _utilization: u128) -> Result<u128> {
        yearly_to_per_second_rate(self.yearly_rate)
    }
}
