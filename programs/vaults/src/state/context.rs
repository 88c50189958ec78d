use anchor_lang::prelude::*;
use std::cell::{Ref, RefCell, RefMut};

use crate::{errors::ErrorCodes, invokes::Host, state::Vault};

use library::math::casting::*;

/// The vault an entry point runs on, plus the host it runs in.
#[derive(Clone, Copy)]
pub struct VaultContext<'a> {
    pub host: &'a dyn Host,
    pub vault: Pubkey,
}

impl<'a> VaultContext<'a> {
    pub fn new(host: &'a dyn Host, vault: Pubkey) -> Self {
        Self { host, vault }
    }

    pub fn now(&self) -> Result<u64> {
        Ok(self.host.timestamp().cast()?)
    }

    fn cell(&self, vault: &Pubkey) -> Result<&'a RefCell<Vault>> {
        self.host
            .vault_cell(vault)
            .ok_or_else(|| error!(ErrorCodes::VaultNotFound))
    }

    pub fn load(&self) -> Result<Ref<'a, Vault>> {
        self.load_vault(&self.vault)
    }

    /// Read access to any vault; a vault in the middle of a mutation is locked
    pub fn load_vault(&self, vault: &Pubkey) -> Result<Ref<'a, Vault>> {
        self.cell(vault)?
            .try_borrow()
            .map_err(|_| error!(ErrorCodes::VaultReentrancy))
    }

    pub fn load_mut(&self) -> Result<RefMut<'a, Vault>> {
        self.cell(&self.vault)?
            .try_borrow_mut()
            .map_err(|_| error!(ErrorCodes::VaultReentrancy))
    }

    /// Runs `body` with the vault locked for its whole duration.
    pub fn non_reentrant<R>(&self, body: impl FnOnce(&mut Vault) -> Result<R>) -> Result<R> {
        let mut vault = self.load_mut()?;
        vault.lock()?;

        let result = body(&mut vault);

        vault.unlock();
        result
    }
}
