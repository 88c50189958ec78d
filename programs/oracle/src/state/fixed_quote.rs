use anchor_lang::prelude::*;
use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::constants::{DEFAULT_ASSET_DECIMALS, MAX_ASSET_DECIMALS};
use crate::errors::ErrorCodes;
use crate::events::{LogUpdateAuthority, LogUpdateDecimals, LogUpdatePrice};
use crate::helper::{quote_direct, quote_inverse};
use crate::state::PriceOracle;

/// Quote table keyed by `(base, quote)`, maintained by a single authority.
///
/// Prices are quote units per one whole base unit. A pair is also readable in
/// the inverse direction when only `(quote, base)` was set.
#[derive(Debug, Default)]
pub struct FixedQuoteOracle {
    authority: RefCell<Pubkey>,
    prices: RefCell<BTreeMap<(Pubkey, Pubkey), u128>>,
    decimals: RefCell<BTreeMap<Pubkey, u8>>,
}

impl FixedQuoteOracle {
    pub fn new(authority: Pubkey) -> Self {
        Self {
            authority: RefCell::new(authority),
            ..Default::default()
        }
    }

    pub fn authority(&self) -> Pubkey {
        *self.authority.borrow()
    }

    fn verify_authority(&self, signer: &Pubkey) -> Result<()> {
        if *signer != self.authority() {
            return err!(ErrorCodes::OracleAdminOnlyAuthority);
        }
        Ok(())
    }

    pub fn update_authority(&self, signer: &Pubkey, new_authority: Pubkey) -> Result<()> {
        self.verify_authority(signer)?;

        if new_authority == Pubkey::default() {
            return err!(ErrorCodes::InvalidParams);
        }

        *self.authority.borrow_mut() = new_authority;
        emit!(LogUpdateAuthority { new_authority });

        Ok(())
    }

    pub fn set_decimals(&self, signer: &Pubkey, asset: Pubkey, decimals: u8) -> Result<()> {
        self.verify_authority(signer)?;

        if decimals > MAX_ASSET_DECIMALS {
            return err!(ErrorCodes::InvalidDecimals);
        }

        self.decimals.borrow_mut().insert(asset, decimals);
        emit!(LogUpdateDecimals { asset, decimals });

        Ok(())
    }

    pub fn set_price(&self, signer: &Pubkey, base: Pubkey, quote: Pubkey, price: u128) -> Result<()> {
        self.verify_authority(signer)?;

        if base == quote || price == 0 {
            return err!(ErrorCodes::InvalidParams);
        }

        self.prices.borrow_mut().insert((base, quote), price);
        emit!(LogUpdatePrice { base, quote, price });

        Ok(())
    }

    pub fn decimals_of(&self, asset: &Pubkey) -> u8 {
        self.decimals
            .borrow()
            .get(asset)
            .copied()
            .unwrap_or(DEFAULT_ASSET_DECIMALS)
    }

    pub fn price_of(&self, base: &Pubkey, quote: &Pubkey) -> Option<u128> {
        self.prices.borrow().get(&(*base, *quote)).copied()
    }
}

impl PriceOracle for FixedQuoteOracle {
    fn get_quote(&self, in_amount: u128, base: &Pubkey, quote: &Pubkey) -> Result<u128> {
        if base == quote {
            return Ok(in_amount);
        }

        if let Some(price) = self.price_of(base, quote) {
            return quote_direct(in_amount, price, self.decimals_of(base));
        }

        if let Some(price) = self.price_of(quote, base) {
            return quote_inverse(in_amount, price, self.decimals_of(quote));
        }

        msg!("No price for {} / {}", base, quote);
        err!(ErrorCodes::PriceNotFound)
    }
}
