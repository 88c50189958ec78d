use anchor_lang::prelude::*;

/// Asset movements. Transfers are atomic and fail instead of moving partial amounts.
pub trait TokenInterface {
    fn asset_decimals(&self, asset: &Pubkey) -> Result<u8>;

    fn asset_balance(&self, asset: &Pubkey, holder: &Pubkey) -> u128;

    fn transfer_asset(&self, asset: &Pubkey, from: &Pubkey, to: &Pubkey, amount: u128)
        -> Result<()>;
}
