use anchor_lang::prelude::*;

#[event]
pub struct LogBorrowRateCap {
    pub utilization: u128,
}

#[event]
pub struct LogUpdateRateDataV1 {
    pub kink: u128,
    pub rate_at_utilization_zero: u128,
    pub rate_at_utilization_kink: u128,
    pub rate_at_utilization_max: u128,
}

#[event]
pub struct LogUpdateRateDataV2 {
    pub kink1: u128,
    pub kink2: u128,
    pub rate_at_utilization_zero: u128,
    pub rate_at_utilization_kink1: u128,
    pub rate_at_utilization_kink2: u128,
    pub rate_at_utilization_max: u128,
}
