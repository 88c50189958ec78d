use anchor_lang::prelude::*;

use crate::state::DustPolicy;

#[event]
pub struct LogDeposit {
    pub sender: Pubkey,
    pub owner: Pubkey,
    pub assets: u128,
    pub shares: u128,
}

#[event]
pub struct LogWithdraw {
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub owner: Pubkey,
    pub assets: u128,
    pub shares: u128,
}

#[event]
pub struct LogTransfer {
    pub from: Pubkey,
    pub to: Pubkey,
    pub shares: u128,
}

#[event]
pub struct LogBorrow {
    pub account: Pubkey,
    pub receiver: Pubkey,
    pub assets: u128,
}

#[event]
pub struct LogRepay {
    pub sender: Pubkey,
    pub receiver: Pubkey,
    pub assets: u128,
}

#[event]
pub struct LogPullDebt {
    pub from: Pubkey,
    pub to: Pubkey,
    pub assets: u128,
}

#[event]
pub struct LogLiquidate {
    pub liquidator: Pubkey,
    pub violator: Pubkey,
    pub collateral: Pubkey,
    pub repay_assets: u128,
    pub yield_shares: u128,
}

#[event]
pub struct LogAccrueInterest {
    pub vault: Pubkey,
    pub interest_accumulator: u128,
    pub total_borrowed: u128,
    pub last_update_timestamp: u64,
}

#[event]
pub struct LogUpdateInterestRate {
    pub vault: Pubkey,
    pub utilization: u128,
    pub interest_rate: u128,
}

#[event]
pub struct LogUpdateSupplyCap {
    pub vault: Pubkey,
    pub supply_cap: u128,
}

#[event]
pub struct LogUpdateBorrowCap {
    pub vault: Pubkey,
    pub borrow_cap: u128,
}

#[event]
pub struct LogUpdateCollateralFactor {
    pub vault: Pubkey,
    pub collateral: Pubkey,
    pub collateral_factor: u128,
}

#[event]
pub struct LogUpdateDustPolicy {
    pub vault: Pubkey,
    pub dust_policy: DustPolicy,
}

#[event]
pub struct LogUpdateInterestRateModel {
    pub vault: Pubkey,
}

#[event]
pub struct LogUpdateOwner {
    pub vault: Pubkey,
    pub new_owner: Pubkey,
}
