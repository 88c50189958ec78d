use anchor_lang::prelude::*;

use crate::constants::ACCOUNT_PREFIX_LENGTH;

pub type AccountPrefix = [u8; ACCOUNT_PREFIX_LENGTH];

/// Shared by an owner and all of its sub-accounts.
pub fn account_prefix(account: &Pubkey) -> AccountPrefix {
    let bytes = account.to_bytes();
    let mut prefix = [0u8; ACCOUNT_PREFIX_LENGTH];
    prefix.copy_from_slice(&bytes[..ACCOUNT_PREFIX_LENGTH]);
    prefix
}

pub fn have_common_owner(account: &Pubkey, other: &Pubkey) -> bool {
    account_prefix(account) == account_prefix(other)
}

/// Sub-account `id` of `owner`: the owner's key with its last byte xored by `id`.
pub fn get_sub_account(owner: &Pubkey, id: u8) -> Pubkey {
    let mut bytes = owner.to_bytes();
    bytes[ACCOUNT_PREFIX_LENGTH] ^= id;
    Pubkey::new_from_array(bytes)
}
