use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default)]
pub struct RateDataV1Params {
    /// kink in borrow rate. in 1e2: 100% = 10_000; 1% = 100
    pub kink: u128,
    /// borrow rate when utilization is zero, i.e. the constant minimum borrow rate
    pub rate_at_utilization_zero: u128,
    /// borrow rate at the kink
    pub rate_at_utilization_kink: u128,
    /// borrow rate at 100% utilization
    pub rate_at_utilization_max: u128,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default)]
pub struct RateDataV2Params {
    /// first kink, below it the rate usually rises slowly
    pub kink1: u128,
    /// second kink, above it the rate usually rises fast
    pub kink2: u128,
    pub rate_at_utilization_zero: u128,
    pub rate_at_utilization_kink1: u128,
    pub rate_at_utilization_kink2: u128,
    pub rate_at_utilization_max: u128,
}
