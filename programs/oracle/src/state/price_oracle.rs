use anchor_lang::prelude::*;

/// Read-only price source consumed by the vaults.
pub trait PriceOracle {
    /// Value of `in_amount` of `base` expressed in `quote` units.
    fn get_quote(&self, in_amount: u128, base: &Pubkey, quote: &Pubkey) -> Result<u128>;
}
