use anchor_lang::prelude::*;

use crate::{
    constants::{FOUR_DECIMALS, MAX_INTEREST_RATE, ONE},
    events::{LogAccrueInterest, LogUpdateInterestRate},
    state::{Vault, VaultKind},
};

use library::math::{casting::*, rpow::rpow, safe_math::*, u256::safe_multiply_divide};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterestState {
    /// per second, in ray
    pub interest_rate: u128,
    /// compounded growth of one unit of debt since creation, in ray; never decreases
    pub interest_accumulator: u128,
    pub last_update_timestamp: u64,
}

impl InterestState {
    pub fn new(timestamp: u64) -> Self {
        Self {
            interest_rate: 0,
            interest_accumulator: ONE,
            last_update_timestamp: timestamp,
        }
    }
}

impl Vault {
    /// `(total_borrowed, interest_accumulator)` as they would be after accruing up to `now`.
    pub fn accrued_interest(&self, now: u64) -> Result<(u128, u128)> {
        let InterestState {
            interest_rate,
            interest_accumulator,
            last_update_timestamp,
        } = self.interest;
        let total_borrowed = self.ledger.total_borrowed;

        if now <= last_update_timestamp || interest_rate == 0 {
            return Ok((total_borrowed, interest_accumulator));
        }

        let elapsed: u128 = now.safe_sub(last_update_timestamp)?.cast()?;
        let growth = rpow(ONE.safe_add(interest_rate)?, elapsed, ONE)?;

        let new_accumulator = safe_multiply_divide(growth, interest_accumulator, ONE)?;
        let new_total_borrowed =
            safe_multiply_divide(total_borrowed, new_accumulator, interest_accumulator)?;

        Ok((new_total_borrowed, new_accumulator))
    }

    /// Commits interest up to `now`. A no-op when already accrued at `now`.
    pub fn accrue_interest(&mut self, now: u64) -> Result<()> {
        if now <= self.interest.last_update_timestamp {
            return Ok(());
        }

        if self.interest.interest_rate == 0 {
            self.interest.last_update_timestamp = now;
            return Ok(());
        }

        let (total_borrowed, interest_accumulator) = self.accrued_interest(now)?;

        self.ledger.total_borrowed = total_borrowed;
        self.interest.interest_accumulator = interest_accumulator;
        self.interest.last_update_timestamp = now;

        emit!(LogAccrueInterest {
            vault: self.address,
            interest_accumulator,
            total_borrowed,
            last_update_timestamp: now,
        });

        Ok(())
    }

    /// Borrowed share of all assets, in 1e2 percent.
    pub fn utilization(&self) -> Result<u128> {
        let total_borrowed = self.ledger.total_borrowed;
        let total_assets = self.total_assets_held.safe_add(total_borrowed)?;

        if total_assets == 0 {
            return Ok(0);
        }

        Ok(safe_multiply_divide(total_borrowed, FOUR_DECIMALS, total_assets)?)
    }

    /// Asks the rate model for the rate at the current utilization. Interest
    /// must already be accrued with the previous rate.
    pub fn update_interest_rate(&mut self) -> Result<()> {
        let rate_model = match &self.kind {
            VaultKind::RegularBorrowable(config) => config.rate_model.clone(),
            _ => return Ok(()),
        };

        let utilization = self.utilization()?;
        let interest_rate = rate_model.compute_rate(utilization)?.min(MAX_INTEREST_RATE);

        self.interest.interest_rate = interest_rate;

        emit!(LogUpdateInterestRate {
            vault: self.address,
            utilization,
            interest_rate,
        });

        Ok(())
    }
}
