use anchor_lang::prelude::*;

/// Ray precision used by the interest accumulator and per-second rates
pub const ONE: u128 = interest_rate_model::constants::ONE; // 1e27

pub const SECONDS_PER_YEAR: u128 = interest_rate_model::constants::SECONDS_PER_YEAR; // 365 * 24 * 60 * 60

/// Utilization precision handed to the rate model
pub const FOUR_DECIMALS: u128 = interest_rate_model::constants::FOUR_DECIMALS; // 1e4

/// Collateral factors and liquidation percentages are whole percents
pub const COLLATERAL_FACTOR_PRECISION: u128 = 100;

/// Health factor a liquidation restores the violator to, in percent (1.25)
pub const TARGET_HEALTH_FACTOR: u128 = 125;

/// Upper bound for the dynamic liquidation incentive, in percent
pub const MAX_LIQUIDATION_INCENTIVE: u128 = 20;

/// Loan to value of a simple borrowable vault's own shares, in percent
pub const SELF_COLLATERAL_LTV: u128 = 90;

/// Per-second rate ceiling, the rate models' yearly cap (655.35%) in ray
pub const MAX_INTEREST_RATE: u128 =
    ONE * interest_rate_model::constants::MAX_RATE as u128 / FOUR_DECIMALS / SECONDS_PER_YEAR;

/// Null account, operations on it only require a vault status check
pub const ADDRESS_DEAD: Pubkey = Pubkey::new_from_array([0; 32]);
