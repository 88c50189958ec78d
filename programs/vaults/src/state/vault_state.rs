use anchor_lang::prelude::*;
use std::collections::BTreeMap;

use crate::{errors::ErrorCodes, state::*};

use library::math::safe_math::*;

#[derive(Clone)]
pub enum VaultKind {
    /// Collateral only, nothing can be borrowed from it
    Simple,
    /// Interest free borrowing against the account's own shares in this vault
    SimpleBorrowable,
    /// Interest accruing borrowing against oracle priced collateral, liquidatable
    RegularBorrowable(Box<RiskConfig>),
}

pub struct InitVaultParams {
    pub asset: Pubkey,
    pub owner: Pubkey,
    pub kind: VaultKind,
    pub supply_cap: u128,
    pub borrow_cap: u128,
}

#[derive(Clone)]
pub struct Vault {
    pub address: Pubkey,
    pub asset: Pubkey,
    pub owner: Pubkey,
    pub kind: VaultKind,

    pub total_shares: u128,
    pub total_assets_held: u128, // liquid assets in the vault, lent out assets excluded
    pub balances: BTreeMap<Pubkey, u128>,

    pub supply_cap: u128, // 0 = unlimited
    pub borrow_cap: u128, // 0 = unlimited

    pub snapshot: Vec<u8>, // encoded VaultSnapshot, empty outside of a batch
    pub reentrancy_state: ReentrancyState,

    pub ledger: DebtLedger,
    pub interest: InterestState,
}

impl Vault {
    pub fn new(address: Pubkey, params: InitVaultParams, timestamp: u64) -> Self {
        Self {
            address,
            asset: params.asset,
            owner: params.owner,
            kind: params.kind,
            total_shares: 0,
            total_assets_held: 0,
            balances: BTreeMap::new(),
            supply_cap: params.supply_cap,
            borrow_cap: params.borrow_cap,
            snapshot: Vec::new(),
            reentrancy_state: ReentrancyState::Unlocked,
            ledger: DebtLedger::default(),
            interest: InterestState::new(timestamp),
        }
    }

    pub fn is_borrowable(&self) -> bool {
        !matches!(self.kind, VaultKind::Simple)
    }

    pub fn require_borrowable(&self) -> Result<()> {
        if !self.is_borrowable() {
            return Err(error!(ErrorCodes::VaultOperationNotSupported));
        }
        Ok(())
    }

    pub fn risk_config(&self) -> Result<&RiskConfig> {
        match &self.kind {
            VaultKind::RegularBorrowable(config) => Ok(config),
            _ => Err(error!(ErrorCodes::VaultOperationNotSupported)),
        }
    }

    pub fn risk_config_mut(&mut self) -> Result<&mut RiskConfig> {
        match &mut self.kind {
            VaultKind::RegularBorrowable(config) => Ok(config),
            _ => Err(error!(ErrorCodes::VaultOperationNotSupported)),
        }
    }

    pub fn balance_of(&self, account: &Pubkey) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    pub fn mint_shares(&mut self, to: &Pubkey, shares: u128) -> Result<()> {
        let balance = self.balance_of(to).safe_add(shares)?;
        self.balances.insert(*to, balance);
        self.total_shares = self.total_shares.safe_add(shares)?;
        Ok(())
    }

    pub fn burn_shares(&mut self, from: &Pubkey, shares: u128) -> Result<()> {
        let balance = self.balance_of(from);
        if shares > balance {
            return Err(error!(ErrorCodes::VaultInsufficientBalance));
        }

        self.set_balance(from, balance - shares);
        self.total_shares = self.total_shares.safe_sub(shares)?;
        Ok(())
    }

    pub fn transfer_shares(&mut self, from: &Pubkey, to: &Pubkey, shares: u128) -> Result<()> {
        let from_balance = self.balance_of(from);
        if shares > from_balance {
            return Err(error!(ErrorCodes::VaultInsufficientBalance));
        }

        self.set_balance(from, from_balance - shares);
        let to_balance = self.balance_of(to).safe_add(shares)?;
        self.set_balance(to, to_balance);
        Ok(())
    }

    fn set_balance(&mut self, account: &Pubkey, balance: u128) {
        if balance == 0 {
            self.balances.remove(account);
        } else {
            self.balances.insert(*account, balance);
        }
    }

    pub fn add_assets_held(&mut self, assets: u128) -> Result<()> {
        self.total_assets_held = self.total_assets_held.safe_add(assets)?;
        Ok(())
    }

    pub fn remove_assets_held(&mut self, assets: u128) -> Result<()> {
        if assets > self.total_assets_held {
            return Err(error!(ErrorCodes::VaultInsufficientAssets));
        }
        self.total_assets_held -= assets;
        Ok(())
    }
}
