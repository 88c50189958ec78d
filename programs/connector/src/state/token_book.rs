use anchor_lang::prelude::*;
use std::collections::BTreeMap;

use crate::errors::ErrorCodes;

use library::math::safe_math::*;

/// Balances of every asset known to the connector, keyed by `(asset, holder)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenBook {
    pub decimals: BTreeMap<Pubkey, u8>,
    pub balances: BTreeMap<(Pubkey, Pubkey), u128>,
}

impl TokenBook {
    pub fn create_asset(&mut self, asset: Pubkey, decimals: u8) {
        self.decimals.insert(asset, decimals);
    }

    pub fn decimals_of(&self, asset: &Pubkey) -> Result<u8> {
        self.decimals
            .get(asset)
            .copied()
            .ok_or_else(|| error!(ErrorCodes::ConnectorUnknownAsset))
    }

    pub fn balance_of(&self, asset: &Pubkey, holder: &Pubkey) -> u128 {
        self.balances.get(&(*asset, *holder)).copied().unwrap_or(0)
    }

    pub fn mint(&mut self, asset: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        self.decimals_of(asset)?;
        let balance = self.balance_of(asset, to).safe_add(amount)?;
        self.balances.insert((*asset, *to), balance);
        Ok(())
    }

    /// Moves the whole `amount` or nothing.
    pub fn transfer(&mut self, asset: &Pubkey, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        self.decimals_of(asset)?;

        let from_balance = self.balance_of(asset, from);
        if amount > from_balance {
            msg!("Insufficient {} balance of {}: {} < {}", asset, from, from_balance, amount);
            return Err(error!(ErrorCodes::ConnectorInsufficientBalance));
        }

        self.balances.insert((*asset, *from), from_balance - amount);
        let to_balance = self.balance_of(asset, to).safe_add(amount)?;
        self.balances.insert((*asset, *to), to_balance);
        Ok(())
    }
}
