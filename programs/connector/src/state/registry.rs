use anchor_lang::prelude::*;
use std::collections::BTreeMap;

use crate::utils::{account_prefix, AccountPrefix};

/// Owners of account groups and every account's enabled collaterals and controllers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountRegistry {
    pub owners: BTreeMap<AccountPrefix, Pubkey>,
    pub collaterals: BTreeMap<Pubkey, Vec<Pubkey>>,
    pub controllers: BTreeMap<Pubkey, Vec<Pubkey>>,
}

impl AccountRegistry {
    pub fn owner_of(&self, account: &Pubkey) -> Option<Pubkey> {
        self.owners.get(&account_prefix(account)).copied()
    }

    /// Registers `owner` for its group unless one is known already; returns whether it did.
    pub fn register_owner(&mut self, owner: &Pubkey) -> bool {
        let prefix = account_prefix(owner);
        if self.owners.contains_key(&prefix) {
            return false;
        }
        self.owners.insert(prefix, *owner);
        true
    }

    pub fn collaterals_of(&self, account: &Pubkey) -> Vec<Pubkey> {
        self.collaterals.get(account).cloned().unwrap_or_default()
    }

    pub fn controllers_of(&self, account: &Pubkey) -> Vec<Pubkey> {
        self.controllers.get(account).cloned().unwrap_or_default()
    }

    pub fn is_collateral_enabled(&self, account: &Pubkey, vault: &Pubkey) -> bool {
        self.collaterals
            .get(account)
            .is_some_and(|collaterals| collaterals.contains(vault))
    }

    pub fn is_controller_enabled(&self, account: &Pubkey, vault: &Pubkey) -> bool {
        self.controllers
            .get(account)
            .is_some_and(|controllers| controllers.contains(vault))
    }

    pub fn enable_collateral(&mut self, account: &Pubkey, vault: &Pubkey) -> bool {
        insert_unique(self.collaterals.entry(*account).or_default(), vault)
    }

    pub fn disable_collateral(&mut self, account: &Pubkey, vault: &Pubkey) -> bool {
        remove_from(&mut self.collaterals, account, vault)
    }

    pub fn enable_controller(&mut self, account: &Pubkey, vault: &Pubkey) -> bool {
        insert_unique(self.controllers.entry(*account).or_default(), vault)
    }

    pub fn disable_controller(&mut self, account: &Pubkey, vault: &Pubkey) -> bool {
        remove_from(&mut self.controllers, account, vault)
    }
}

fn insert_unique(set: &mut Vec<Pubkey>, vault: &Pubkey) -> bool {
    if set.contains(vault) {
        return false;
    }
    set.push(*vault);
    true
}

fn remove_from(sets: &mut BTreeMap<Pubkey, Vec<Pubkey>>, account: &Pubkey, vault: &Pubkey) -> bool {
    let Some(set) = sets.get_mut(account) else {
        return false;
    };

    let before = set.len();
    set.retain(|enabled| enabled != vault);
    let removed = set.len() != before;

    if set.is_empty() {
        sets.remove(account);
    }
    removed
}
