use anchor_lang::prelude::Pubkey;
use vaults::invokes::TokenInterface;

use crate::{core::env::Env, errors::Result};

/// Token management trait
pub trait TokenHelper {
    /// Mint tokens to a holder
    fn mint_tokens(&mut self, asset: &Pubkey, owner: &Pubkey, amount: u128) -> Result<()>;

    /// Get token balance of a holder
    fn token_balance(&self, owner: &Pubkey, asset: &Pubkey) -> u128;

    /// Get asset decimals
    fn asset_decimals(&self, asset: &Pubkey) -> Result<u8>;
}

impl TokenHelper for Env {
    fn mint_tokens(&mut self, asset: &Pubkey, owner: &Pubkey, amount: u128) -> Result<()> {
        self.connector.mint_asset(asset, owner, amount)?;
        Ok(())
    }

    fn token_balance(&self, owner: &Pubkey, asset: &Pubkey) -> u128 {
        self.connector.asset_balance(asset, owner)
    }

    fn asset_decimals(&self, asset: &Pubkey) -> Result<u8> {
        Ok(self.connector.asset_decimals(asset)?)
    }
}
