use anchor_lang::prelude::*;

#[event]
pub struct LogUpdatePrice {
    pub base: Pubkey,
    pub quote: Pubkey,
    pub price: u128,
}

#[event]
pub struct LogUpdateDecimals {
    pub asset: Pubkey,
    pub decimals: u8,
}

#[event]
pub struct LogUpdateAuthority {
    pub new_authority: Pubkey,
}
