use anchor_lang::prelude::*;

use vaults::{
    invokes::Caller,
    module::{admin, user, view},
    state::{DustPolicy, VaultContext},
    utils::AccountLiquidity,
};

use super::{VaultFixture, E18, E6};

impl VaultFixture {
    /***********************************|
    |           Connector calls          |
    |__________________________________*/

    /// Runs `body` on `vault` on behalf of `account`, signed by the account itself.
    pub fn call<R>(
        &self,
        account: &Pubkey,
        vault: &Pubkey,
        body: impl FnOnce(&VaultContext, Caller) -> Result<R>,
    ) -> Result<R> {
        self.env.connector().call(account, account, vault, body)
    }

    pub fn fund(&self, asset: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        self.env.connector().mint_asset(asset, to, amount)
    }

    pub fn enable_collateral(&self, account: &Pubkey, vault: &Pubkey) -> Result<()> {
        self.env.connector().enable_collateral(account, account, vault)
    }

    pub fn disable_collateral(&self, account: &Pubkey, vault: &Pubkey) -> Result<()> {
        self.env.connector().disable_collateral(account, account, vault)
    }

    pub fn enable_controller(&self, account: &Pubkey, vault: &Pubkey) -> Result<()> {
        self.env.connector().enable_controller(account, account, vault)
    }

    /***********************************|
    |            Vault actions           |
    |__________________________________*/

    pub fn deposit(&self, account: &Pubkey, vault: &Pubkey, assets: u128) -> Result<u128> {
        let receiver = *account;
        self.call(account, vault, |ctx, caller| {
            user::deposit(ctx, caller, assets, receiver)
        })
    }

    pub fn mint(&self, account: &Pubkey, vault: &Pubkey, shares: u128) -> Result<u128> {
        let receiver = *account;
        self.call(account, vault, |ctx, caller| {
            user::mint(ctx, caller, shares, receiver)
        })
    }

    pub fn withdraw(&self, account: &Pubkey, vault: &Pubkey, assets: u128) -> Result<u128> {
        let owner = *account;
        self.call(account, vault, |ctx, caller| {
            user::withdraw(ctx, caller, assets, owner, owner)
        })
    }

    pub fn redeem(&self, account: &Pubkey, vault: &Pubkey, shares: u128) -> Result<u128> {
        let owner = *account;
        self.call(account, vault, |ctx, caller| {
            user::redeem(ctx, caller, shares, owner, owner)
        })
    }

    pub fn transfer(&self, account: &Pubkey, vault: &Pubkey, to: &Pubkey, shares: u128) -> Result<()> {
        let to = *to;
        self.call(account, vault, |ctx, caller| {
            user::transfer(ctx, caller, to, shares)
        })
    }

    pub fn borrow(&self, account: &Pubkey, vault: &Pubkey, assets: u128) -> Result<()> {
        let receiver = *account;
        self.call(account, vault, |ctx, caller| {
            user::borrow(ctx, caller, assets, receiver)
        })
    }

    pub fn repay(&self, account: &Pubkey, vault: &Pubkey, assets: u128, receiver: &Pubkey) -> Result<()> {
        let receiver = *receiver;
        self.call(account, vault, |ctx, caller| {
            user::repay(ctx, caller, assets, receiver)
        })
    }

    pub fn pull_debt(&self, account: &Pubkey, vault: &Pubkey, from: &Pubkey, assets: u128) -> Result<()> {
        let from = *from;
        self.call(account, vault, |ctx, caller| {
            user::pull_debt(ctx, caller, from, assets)
        })
    }

    pub fn wind(&self, account: &Pubkey, vault: &Pubkey, assets: u128) -> Result<u128> {
        let receiver = *account;
        self.call(account, vault, |ctx, caller| {
            user::wind(ctx, caller, assets, receiver)
        })
    }

    pub fn unwind(&self, account: &Pubkey, vault: &Pubkey, assets: u128) -> Result<u128> {
        let debt_from = *account;
        self.call(account, vault, |ctx, caller| {
            user::unwind(ctx, caller, assets, debt_from)
        })
    }

    pub fn disable_controller(&self, account: &Pubkey, vault: &Pubkey) -> Result<()> {
        self.call(account, vault, user::disable_controller)
    }

    /// Liquidates `violator` in the liability vault, returns the seized shares.
    pub fn liquidate(
        &self,
        liquidator: &Pubkey,
        violator: &Pubkey,
        collateral: &Pubkey,
        repay_assets: u128,
    ) -> Result<u128> {
        let (violator, collateral) = (*violator, *collateral);
        self.call(liquidator, &self.liability_vault, |ctx, caller| {
            user::liquidate(ctx, caller, violator, collateral, repay_assets)
        })
    }

    /***********************************|
    |               Admin                |
    |__________________________________*/

    pub fn set_supply_cap(&self, vault: &Pubkey, supply_cap: u128) -> Result<()> {
        admin::set_supply_cap(&self.env.connector().context(vault)?, &self.admin, supply_cap)
    }

    pub fn set_borrow_cap(&self, vault: &Pubkey, borrow_cap: u128) -> Result<()> {
        admin::set_borrow_cap(&self.env.connector().context(vault)?, &self.admin, borrow_cap)
    }

    pub fn set_collateral_factor(&self, collateral: &Pubkey, collateral_factor: u128) -> Result<()> {
        admin::set_collateral_factor(
            &self.env.connector().context(&self.liability_vault)?,
            &self.admin,
            *collateral,
            collateral_factor,
        )
    }

    pub fn set_dust_policy(&self, dust_policy: DustPolicy) -> Result<()> {
        admin::set_dust_policy(
            &self.env.connector().context(&self.liability_vault)?,
            &self.admin,
            dust_policy,
        )
    }

    /***********************************|
    |               Views                |
    |__________________________________*/

    pub fn shares_of(&self, vault: &Pubkey, account: &Pubkey) -> u128 {
        self.view(vault, |ctx| view::balance_of(ctx, account))
    }

    pub fn debt_of(&self, account: &Pubkey) -> u128 {
        self.view(&self.liability_vault, |ctx| view::debt_of(ctx, account))
    }

    pub fn debt_in(&self, vault: &Pubkey, account: &Pubkey) -> u128 {
        self.view(vault, |ctx| view::debt_of(ctx, account))
    }

    pub fn account_liquidity(&self, account: &Pubkey) -> AccountLiquidity {
        self.view(&self.liability_vault, |ctx| view::account_liquidity(ctx, account))
    }

    pub fn max_withdraw(&self, vault: &Pubkey, account: &Pubkey) -> u128 {
        self.view(vault, |ctx| view::max_withdraw(ctx, account))
    }

    pub fn total_assets(&self, vault: &Pubkey) -> u128 {
        self.view(vault, view::total_assets)
    }

    pub fn total_borrowed(&self, vault: &Pubkey) -> u128 {
        self.view(vault, view::total_borrowed)
    }

    pub fn interest_accumulator(&self) -> u128 {
        self.view(&self.liability_vault, view::interest_accumulator)
    }

    pub fn view<R>(&self, vault: &Pubkey, read: impl FnOnce(&VaultContext) -> Result<R>) -> R {
        self.env
            .connector()
            .context(vault)
            .and_then(|ctx| read(&ctx))
            .expect("Failed to read vault")
    }

    /***********************************|
    |             Scenarios              |
    |__________________________________*/

    /// Bob lends 100 in the liability vault; alice deposits 100 of collateral 1
    /// (value 1) and 50 of collateral 2 (value 5, 2.5 after the factor), and
    /// lets the liability vault control her account. Alice can borrow exactly 35.
    pub fn setup_borrower(&self) -> Result<()> {
        let (alice, bob) = (self.alice, self.bob);

        self.fund(&self.liability_asset, &bob, 100 * E18)?;
        self.deposit(&bob, &self.liability_vault, 100 * E18)?;

        self.fund(&self.collateral_1_asset, &alice, 100 * E18)?;
        self.fund(&self.collateral_2_asset, &alice, 50 * E6)?;
        self.deposit(&alice, &self.collateral_1_vault, 100 * E18)?;
        self.deposit(&alice, &self.collateral_2_vault, 50 * E6)?;

        self.enable_collateral(&alice, &self.collateral_1_vault)?;
        self.enable_collateral(&alice, &self.collateral_2_vault)?;
        self.enable_controller(&alice, &self.liability_vault)
    }

    /// Charlie backs liquidations with 1000 of collateral 1 (value 10) and the
    /// liability vault as controller.
    pub fn setup_liquidator(&self) -> Result<()> {
        let charlie = self.charlie;

        self.fund(&self.collateral_1_asset, &charlie, 1_000 * E18)?;
        self.deposit(&charlie, &self.collateral_1_vault, 1_000 * E18)?;
        self.enable_collateral(&charlie, &self.collateral_1_vault)?;
        self.enable_controller(&charlie, &self.liability_vault)
    }
}
