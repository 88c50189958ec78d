use anchor_lang::prelude::*;

#[event]
pub struct LogEnableCollateral {
    pub account: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct LogDisableCollateral {
    pub account: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct LogEnableController {
    pub account: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct LogDisableController {
    pub account: Pubkey,
    pub vault: Pubkey,
}

#[event]
pub struct LogAccountOwnerRegistered {
    pub owner: Pubkey,
}
