use anchor_lang::prelude::*;

/// Accounts and vaults waiting for their status check at the end of the batch.
///
/// Both sets keep insertion order and hold each key once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingChecks {
    pub accounts: Vec<Pubkey>,
    pub vaults: Vec<Pubkey>,
    pub in_progress: bool,
}

impl PendingChecks {
    pub fn require_account(&mut self, account: &Pubkey) {
        if !self.accounts.contains(account) {
            self.accounts.push(*account);
        }
    }

    pub fn require_vault(&mut self, vault: &Pubkey) {
        if !self.vaults.contains(vault) {
            self.vaults.push(*vault);
        }
    }

    pub fn forgive_account(&mut self, account: &Pubkey) {
        self.accounts.retain(|pending| pending != account);
    }

    pub fn is_account_pending(&self, account: &Pubkey) -> bool {
        self.accounts.contains(account)
    }

    pub fn take_accounts(&mut self) -> Vec<Pubkey> {
        std::mem::take(&mut self.accounts)
    }

    pub fn take_vaults(&mut self) -> Vec<Pubkey> {
        std::mem::take(&mut self.vaults)
    }
}
