use anchor_lang::prelude::*;

use crate::state::Vault;

use library::math::{
    safe_math::*,
    u256::{mul_div, Rounding},
};

/// Share accounting. Lent out assets still belong to depositors, so the
/// denominator is the liquid balance plus everything borrowed, each side
/// offset by one virtual unit against donation attacks on an empty vault.
impl Vault {
    pub fn total_assets(&self, now: u64) -> Result<u128> {
        Ok(self.total_assets_held.safe_add(self.total_borrowed_at(now)?)?)
    }

    pub fn convert_to_shares(&self, assets: u128, rounding: Rounding, now: u64) -> Result<u128> {
        Ok(mul_div(
            assets,
            self.total_shares.safe_add(1)?,
            self.total_assets(now)?.safe_add(1)?,
            rounding,
        )?)
    }

    pub fn convert_to_assets(&self, shares: u128, rounding: Rounding, now: u64) -> Result<u128> {
        Ok(mul_div(
            shares,
            self.total_assets(now)?.safe_add(1)?,
            self.total_shares.safe_add(1)?,
            rounding,
        )?)
    }

    pub fn preview_deposit(&self, assets: u128, now: u64) -> Result<u128> {
        self.convert_to_shares(assets, Rounding::Floor, now)
    }

    pub fn preview_mint(&self, shares: u128, now: u64) -> Result<u128> {
        self.convert_to_assets(shares, Rounding::Ceil, now)
    }

    pub fn preview_withdraw(&self, assets: u128, now: u64) -> Result<u128> {
        self.convert_to_shares(assets, Rounding::Ceil, now)
    }

    pub fn preview_redeem(&self, shares: u128, now: u64) -> Result<u128> {
        self.convert_to_assets(shares, Rounding::Floor, now)
    }

    /// Bounded by the liquid balance, lent out assets cannot be withdrawn.
    pub fn max_withdraw(&self, owner: &Pubkey, now: u64) -> Result<u128> {
        let assets = self.convert_to_assets(self.balance_of(owner), Rounding::Floor, now)?;
        Ok(assets.min(self.total_assets_held))
    }

    pub fn max_redeem(&self, owner: &Pubkey, now: u64) -> Result<u128> {
        let liquid_shares = self.convert_to_shares(self.total_assets_held, Rounding::Floor, now)?;
        Ok(self.balance_of(owner).min(liquid_shares))
    }
}
