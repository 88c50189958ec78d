use anchor_lang::prelude::*;
use std::collections::BTreeMap;

use crate::{constants::ONE, errors::ErrorCodes, state::Vault};

use library::math::{safe_math::*, u256::safe_multiply_divide};

/// Nominal debt per account, each scaled by the accumulator it was last touched at.
///
/// Real debt is `owed * accumulator / user_index`. Vaults without interest keep
/// every index at [`ONE`], so real debt equals nominal debt there.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebtLedger {
    pub owed: BTreeMap<Pubkey, u128>,
    pub user_index: BTreeMap<Pubkey, u128>,
    pub total_borrowed: u128,
}

impl DebtLedger {
    pub fn owed_of(&self, account: &Pubkey) -> u128 {
        self.owed.get(account).copied().unwrap_or(0)
    }

    pub fn user_index_of(&self, account: &Pubkey) -> u128 {
        self.user_index.get(account).copied().unwrap_or(ONE)
    }

    /// Real debt of `account` at `accumulator`, rounded down.
    pub fn debt_of(&self, account: &Pubkey, accumulator: u128) -> Result<u128> {
        let owed = self.owed_of(account);
        if owed == 0 {
            return Ok(0);
        }

        Ok(safe_multiply_divide(
            owed,
            accumulator,
            self.user_index_of(account),
        )?)
    }

    fn set_owed(&mut self, account: &Pubkey, owed: u128, accumulator: u128) {
        if owed == 0 {
            self.owed.remove(account);
            self.user_index.remove(account);
        } else {
            self.owed.insert(*account, owed);
            self.user_index.insert(*account, accumulator);
        }
    }

    pub fn increase_owed(&mut self, account: &Pubkey, assets: u128, accumulator: u128) -> Result<()> {
        let owed = self.debt_of(account, accumulator)?.safe_add(assets)?;
        self.set_owed(account, owed, accumulator);
        self.total_borrowed = self.total_borrowed.safe_add(assets)?;
        Ok(())
    }

    pub fn decrease_owed(&mut self, account: &Pubkey, assets: u128, accumulator: u128) -> Result<()> {
        let debt = self.debt_of(account, accumulator)?;
        if assets > debt {
            return Err(error!(ErrorCodes::VaultInsufficientDebt));
        }

        self.set_owed(account, debt - assets, accumulator);
        // per-account floors can leave the total a few wei below the sum of debts
        self.total_borrowed = self.total_borrowed.saturating_sub(assets);
        Ok(())
    }

    /// Moves `assets` of real debt from `from` to `to`, total borrowed unchanged.
    pub fn transfer_owed(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        assets: u128,
        accumulator: u128,
    ) -> Result<()> {
        let from_debt = self.debt_of(from, accumulator)?;
        if assets > from_debt {
            return Err(error!(ErrorCodes::VaultInsufficientDebt));
        }
        let to_debt = self.debt_of(to, accumulator)?.safe_add(assets)?;

        self.set_owed(from, from_debt - assets, accumulator);
        self.set_owed(to, to_debt, accumulator);
        Ok(())
    }
}

impl Vault {
    /// Real debt of `account` with interest accrued up to `now`.
    pub fn debt_of(&self, account: &Pubkey, now: u64) -> Result<u128> {
        let (_, accumulator) = self.accrued_interest(now)?;
        self.ledger.debt_of(account, accumulator)
    }

    pub fn total_borrowed_at(&self, now: u64) -> Result<u128> {
        let (total_borrowed, _) = self.accrued_interest(now)?;
        Ok(total_borrowed)
    }

    pub fn increase_owed(&mut self, account: &Pubkey, assets: u128) -> Result<()> {
        let accumulator = self.interest.interest_accumulator;
        self.ledger.increase_owed(account, assets, accumulator)
    }

    pub fn decrease_owed(&mut self, account: &Pubkey, assets: u128) -> Result<()> {
        let accumulator = self.interest.interest_accumulator;
        self.ledger.decrease_owed(account, assets, accumulator)
    }

    pub fn transfer_owed(&mut self, from: &Pubkey, to: &Pubkey, assets: u128) -> Result<()> {
        let accumulator = self.interest.interest_accumulator;
        self.ledger.transfer_owed(from, to, assets, accumulator)
    }
}
