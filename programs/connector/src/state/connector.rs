use anchor_lang::prelude::*;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::{errors::ErrorCodes, events::*, state::*, utils::have_common_owner, ID};

use library::math::casting::*;

use vaults::{
    invokes::{Caller, CollateralCall, ConnectorInterface, Host, TokenInterface},
    module::{status, user},
    state::{InitVaultParams, Vault, VaultContext},
};

/// Everything a batch may touch, as restored when the batch fails.
#[derive(Clone)]
pub struct ConnectorState {
    pub vaults: BTreeMap<Pubkey, Vault>,
    pub registry: AccountRegistry,
    pub tokens: TokenBook,
    pub checks: PendingChecks,
}

/// Routes account calls into vaults and defers their status checks.
///
/// Calls run inside a batch. Vaults ask for account and vault checks while the
/// batch runs; once its body returns, every account is checked by its single
/// controller and every vault by itself. Any failure restores the state the
/// batch started from.
pub struct Connector {
    clock: Cell<i64>,
    vaults: BTreeMap<Pubkey, RefCell<Vault>>,
    registry: RefCell<AccountRegistry>,
    checks: RefCell<PendingChecks>,
    tokens: RefCell<TokenBook>,
    depth: Cell<u32>,
}

impl Connector {
    pub fn new(timestamp: i64) -> Self {
        Self {
            clock: Cell::new(timestamp),
            vaults: BTreeMap::new(),
            registry: RefCell::new(AccountRegistry::default()),
            checks: RefCell::new(PendingChecks::default()),
            tokens: RefCell::new(TokenBook::default()),
            depth: Cell::new(0),
        }
    }

    /***********************************|
    |              Setup                 |
    |__________________________________*/

    pub fn create_vault(&mut self, params: InitVaultParams) -> Result<Pubkey> {
        let address = Pubkey::new_unique();
        let now: u64 = self.clock.get().cast()?;

        self.vaults
            .insert(address, RefCell::new(Vault::new(address, params, now)));
        Ok(address)
    }

    pub fn create_asset(&self, decimals: u8) -> Pubkey {
        let asset = Pubkey::new_unique();
        self.tokens.borrow_mut().create_asset(asset, decimals);
        asset
    }

    pub fn mint_asset(&self, asset: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        self.tokens.borrow_mut().mint(asset, to, amount)
    }

    pub fn set_timestamp(&self, timestamp: i64) {
        self.clock.set(timestamp);
    }

    pub fn warp(&self, seconds: i64) {
        self.clock.set(self.clock.get() + seconds);
    }

    pub fn context(&self, vault: &Pubkey) -> Result<VaultContext<'_>> {
        if !self.vaults.contains_key(vault) {
            return Err(error!(ErrorCodes::ConnectorVaultNotFound));
        }
        Ok(VaultContext::new(self, *vault))
    }

    /***********************************|
    |              Batches               |
    |__________________________________*/

    /// Runs `body` as one batch. Nested batches join the outermost one, which
    /// alone runs the deferred checks. A batch failing at any depth restores
    /// the state it started from, so an inner error swallowed by the caller
    /// leaves nothing behind.
    pub fn batch<R>(&self, body: impl FnOnce(&Self) -> Result<R>) -> Result<R> {
        if self.checks.borrow().in_progress {
            return Err(error!(ErrorCodes::ConnectorChecksInProgress));
        }

        let saved = self.capture()?;
        let depth = self.depth.get();

        self.depth.set(depth + 1);
        let result = body(self);
        self.depth.set(depth);

        let result = if depth == 0 {
            result.and_then(|value| {
                self.run_deferred_checks()?;
                Ok(value)
            })
        } else {
            result
        };

        if result.is_err() {
            self.restore(saved)?;
        }

        result
    }

    /// Calls into `vault` as `account`, authenticated by `sender`. A batch of one
    /// when not already inside a batch.
    pub fn call<R>(
        &self,
        sender: &Pubkey,
        account: &Pubkey,
        vault: &Pubkey,
        body: impl FnOnce(&VaultContext, Caller) -> Result<R>,
    ) -> Result<R> {
        self.batch(|connector| {
            connector.authenticate(sender, account)?;
            let ctx = connector.context(vault)?;
            body(&ctx, Caller::new(ID, *account))
        })
    }

    /// `sender` may act for every account of its group once it is the registered owner.
    fn authenticate(&self, sender: &Pubkey, account: &Pubkey) -> Result<()> {
        if !have_common_owner(sender, account) {
            return Err(error!(ErrorCodes::ConnectorNotAuthorized));
        }

        let mut registry = self.registry.borrow_mut();
        if registry.register_owner(sender) {
            emit!(LogAccountOwnerRegistered { owner: *sender });
        }

        if registry.owner_of(account) != Some(*sender) {
            return Err(error!(ErrorCodes::ConnectorNotAuthorized));
        }

        Ok(())
    }

    fn run_deferred_checks(&self) -> Result<()> {
        self.checks.borrow_mut().in_progress = true;
        let result = self.check_pending();
        self.checks.borrow_mut().in_progress = false;
        result
    }

    fn check_pending(&self) -> Result<()> {
        let accounts = self.checks.borrow_mut().take_accounts();
        for account in accounts {
            self.check_account(&account)?;
        }

        let vaults = self.checks.borrow_mut().take_vaults();
        for vault in vaults {
            status::check_vault_status(&self.context(&vault)?, Caller::new(ID, vault))?;
        }

        Ok(())
    }

    fn check_account(&self, account: &Pubkey) -> Result<()> {
        let controllers = self.registry.borrow().controllers_of(account);

        match controllers.as_slice() {
            [] => Ok(()),
            [controller] => {
                let collaterals = self.registry.borrow().collaterals_of(account);
                status::check_account_status(
                    &self.context(controller)?,
                    Caller::new(ID, *account),
                    *account,
                    &collaterals,
                )
            }
            _ => {
                msg!("Account {} has {} controllers", account, controllers.len());
                Err(error!(ErrorCodes::ConnectorControllerViolation))
            }
        }
    }

    pub fn capture(&self) -> Result<ConnectorState> {
        let mut vaults = BTreeMap::new();
        for (address, cell) in &self.vaults {
            let vault = cell
                .try_borrow()
                .map_err(|_| error!(ErrorCodes::ConnectorVaultBusy))?;
            vaults.insert(*address, vault.clone());
        }

        Ok(ConnectorState {
            vaults,
            registry: self.registry.borrow().clone(),
            tokens: self.tokens.borrow().clone(),
            checks: self.checks.borrow().clone(),
        })
    }

    pub fn restore(&self, state: ConnectorState) -> Result<()> {
        for (address, vault) in state.vaults {
            let cell = self
                .vaults
                .get(&address)
                .ok_or_else(|| error!(ErrorCodes::ConnectorVaultNotFound))?;
            *cell
                .try_borrow_mut()
                .map_err(|_| error!(ErrorCodes::ConnectorVaultBusy))? = vault;
        }

        *self.registry.borrow_mut() = state.registry;
        *self.tokens.borrow_mut() = state.tokens;
        *self.checks.borrow_mut() = state.checks;
        Ok(())
    }

    /***********************************|
    |             Registry               |
    |__________________________________*/

    pub fn enable_collateral(&self, sender: &Pubkey, account: &Pubkey, vault: &Pubkey) -> Result<()> {
        self.registry_call(sender, account, vault, |registry| {
            if registry.enable_collateral(account, vault) {
                emit!(LogEnableCollateral {
                    account: *account,
                    vault: *vault,
                });
            }
        })
    }

    pub fn disable_collateral(&self, sender: &Pubkey, account: &Pubkey, vault: &Pubkey) -> Result<()> {
        self.registry_call(sender, account, vault, |registry| {
            if registry.disable_collateral(account, vault) {
                emit!(LogDisableCollateral {
                    account: *account,
                    vault: *vault,
                });
            }
        })
    }

    /// Controllers can only be given up by the vault itself, see [`ConnectorInterface::release_controller`].
    pub fn enable_controller(&self, sender: &Pubkey, account: &Pubkey, vault: &Pubkey) -> Result<()> {
        self.registry_call(sender, account, vault, |registry| {
            if registry.enable_controller(account, vault) {
                emit!(LogEnableController {
                    account: *account,
                    vault: *vault,
                });
            }
        })
    }

    fn registry_call(
        &self,
        sender: &Pubkey,
        account: &Pubkey,
        vault: &Pubkey,
        update: impl FnOnce(&mut AccountRegistry),
    ) -> Result<()> {
        self.batch(|connector| {
            connector.authenticate(sender, account)?;
            connector.context(vault)?;

            update(&mut connector.registry.borrow_mut());
            connector.require_account_check(account)
        })
    }

    pub fn get_controllers(&self, account: &Pubkey) -> Vec<Pubkey> {
        self.registry.borrow().controllers_of(account)
    }

    pub fn timestamp(&self) -> i64 {
        self.clock.get()
    }

    fn require_batch(&self) -> Result<()> {
        if self.checks.borrow().in_progress {
            return Err(error!(ErrorCodes::ConnectorChecksInProgress));
        }
        if self.depth.get() == 0 {
            return Err(error!(ErrorCodes::ConnectorNotInBatch));
        }
        Ok(())
    }
}

impl ConnectorInterface for Connector {
    fn connector_id(&self) -> Pubkey {
        ID
    }

    fn get_account_owner(&self, account: &Pubkey) -> Pubkey {
        self.registry.borrow().owner_of(account).unwrap_or(*account)
    }

    fn get_collaterals(&self, account: &Pubkey) -> Vec<Pubkey> {
        self.registry.borrow().collaterals_of(account)
    }

    fn is_collateral_enabled(&self, account: &Pubkey, vault: &Pubkey) -> bool {
        self.registry.borrow().is_collateral_enabled(account, vault)
    }

    fn is_controller_enabled(&self, account: &Pubkey, vault: &Pubkey) -> bool {
        self.registry.borrow().is_controller_enabled(account, vault)
    }

    fn release_controller(&self, vault: &Pubkey, account: &Pubkey) -> Result<()> {
        if self.registry.borrow_mut().disable_controller(account, vault) {
            emit!(LogDisableController {
                account: *account,
                vault: *vault,
            });
        }
        self.require_account_check(account)
    }

    fn require_account_check(&self, account: &Pubkey) -> Result<()> {
        self.require_batch()?;
        self.checks.borrow_mut().require_account(account);
        Ok(())
    }

    fn require_vault_check(&self, vault: &Pubkey) -> Result<()> {
        self.require_batch()?;
        self.checks.borrow_mut().require_vault(vault);
        Ok(())
    }

    fn require_account_and_vault_check(&self, account: &Pubkey, vault: &Pubkey) -> Result<()> {
        self.require_account_check(account)?;
        self.require_vault_check(vault)
    }

    fn forgive_account_check(&self, vault: &Pubkey, account: &Pubkey) -> Result<()> {
        if self.registry.borrow().controllers_of(account) != [*vault] {
            return Err(error!(ErrorCodes::ConnectorNotAuthorized));
        }
        self.checks.borrow_mut().forgive_account(account);
        Ok(())
    }

    fn is_account_check_deferred(&self, account: &Pubkey) -> bool {
        self.checks.borrow().is_account_pending(account)
    }

    fn are_checks_in_progress(&self) -> bool {
        self.checks.borrow().in_progress
    }

    fn control_collateral(
        &self,
        controller: &Pubkey,
        account: &Pubkey,
        collateral: &Pubkey,
        call: CollateralCall,
    ) -> Result<()> {
        self.require_batch()?;

        let registry = self.registry.borrow();
        if registry.controllers_of(account) != [*controller] {
            return Err(error!(ErrorCodes::ConnectorControllerViolation));
        }
        if !registry.is_collateral_enabled(account, collateral) {
            return Err(error!(ErrorCodes::ConnectorNotAuthorized));
        }
        drop(registry);

        let ctx = self.context(collateral)?;
        let caller = Caller::new(ID, *account);

        match call {
            CollateralCall::Transfer { to, shares } => user::transfer(&ctx, caller, to, shares),
        }
    }
}

impl TokenInterface for Connector {
    fn asset_decimals(&self, asset: &Pubkey) -> Result<u8> {
        self.tokens.borrow().decimals_of(asset)
    }

    fn asset_balance(&self, asset: &Pubkey, holder: &Pubkey) -> u128 {
        self.tokens.borrow().balance_of(asset, holder)
    }

    fn transfer_asset(&self, asset: &Pubkey, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        self.tokens.borrow_mut().transfer(asset, from, to, amount)
    }
}

impl Host for Connector {
    fn timestamp(&self) -> i64 {
        self.clock.get()
    }

    fn vault_cell(&self, vault: &Pubkey) -> Option<&RefCell<Vault>> {
        self.vaults.get(vault)
    }
}
