pub mod connector;
pub mod token;

pub use connector::*;
pub use token::*;

use anchor_lang::prelude::*;
use std::cell::RefCell;

use crate::state::Vault;

/// Everything a vault reaches outside of its own state: the connector, the
/// asset ledger, the clock and the other vaults it values collateral in.
pub trait Host: ConnectorInterface + TokenInterface {
    /// Unix timestamp of the current batch
    fn timestamp(&self) -> i64;

    fn vault_cell(&self, vault: &Pubkey) -> Option<&RefCell<Vault>>;
}
