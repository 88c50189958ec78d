use anchor_lang::prelude::*;

use crate::{
    constants::ADDRESS_DEAD,
    errors::ErrorCodes,
    events::*,
    invokes::{Caller, CollateralCall},
    state::*,
    utils::*,
};

use library::math::u256::Rounding;
use oracle::helper::unit_of;

/***********************************|
|         Tokenized vault            |
|__________________________________*/

pub fn deposit(ctx: &VaultContext, caller: Caller, assets: u128, receiver: Pubkey) -> Result<u128> {
    let account = authenticate_caller(ctx, &caller)?;
    let now = ctx.now()?;

    let shares = ctx.non_reentrant(|vault| {
        vault.take_snapshot_once(now)?;

        let shares = vault.preview_deposit(assets, now)?;
        if shares == 0 {
            return Err(error!(ErrorCodes::VaultZeroShares));
        }

        ctx.host
            .transfer_asset(&vault.asset, &account, &vault.address, assets)?;
        vault.add_assets_held(assets)?;
        vault.mint_shares(&receiver, shares)?;

        emit!(LogDeposit {
            sender: account,
            owner: receiver,
            assets,
            shares,
        });

        Ok(shares)
    })?;

    require_checks(ctx, &ADDRESS_DEAD)?;
    Ok(shares)
}

pub fn mint(ctx: &VaultContext, caller: Caller, shares: u128, receiver: Pubkey) -> Result<u128> {
    let account = authenticate_caller(ctx, &caller)?;
    let now = ctx.now()?;

    let assets = ctx.non_reentrant(|vault| {
        vault.take_snapshot_once(now)?;

        if shares == 0 {
            return Err(error!(ErrorCodes::VaultZeroShares));
        }
        let assets = vault.preview_mint(shares, now)?;

        ctx.host
            .transfer_asset(&vault.asset, &account, &vault.address, assets)?;
        vault.add_assets_held(assets)?;
        vault.mint_shares(&receiver, shares)?;

        emit!(LogDeposit {
            sender: account,
            owner: receiver,
            assets,
            shares,
        });

        Ok(assets)
    })?;

    require_checks(ctx, &ADDRESS_DEAD)?;
    Ok(assets)
}

/// Burns the owner's shares for exactly `assets`. The owner must be the calling account.
pub fn withdraw(
    ctx: &VaultContext,
    caller: Caller,
    assets: u128,
    receiver: Pubkey,
    owner: Pubkey,
) -> Result<u128> {
    let account = authenticate_caller(ctx, &caller)?;
    if owner != account {
        return Err(error!(ErrorCodes::VaultNotAuthorized));
    }
    let receiver = resolve_receiver(ctx, &receiver);
    let now = ctx.now()?;

    let shares = ctx.non_reentrant(|vault| {
        vault.take_snapshot_once(now)?;

        let shares = vault.preview_withdraw(assets, now)?;
        if shares == 0 {
            return Err(error!(ErrorCodes::VaultZeroShares));
        }

        vault.burn_shares(&owner, shares)?;
        send_assets(ctx, vault, &receiver, assets)?;

        emit!(LogWithdraw {
            sender: account,
            receiver,
            owner,
            assets,
            shares,
        });

        Ok(shares)
    })?;

    require_checks(ctx, &owner)?;
    Ok(shares)
}

pub fn redeem(
    ctx: &VaultContext,
    caller: Caller,
    shares: u128,
    receiver: Pubkey,
    owner: Pubkey,
) -> Result<u128> {
    let account = authenticate_caller(ctx, &caller)?;
    if owner != account {
        return Err(error!(ErrorCodes::VaultNotAuthorized));
    }
    let receiver = resolve_receiver(ctx, &receiver);
    let now = ctx.now()?;

    let assets = ctx.non_reentrant(|vault| {
        vault.take_snapshot_once(now)?;

        let assets = vault.preview_redeem(shares, now)?;
        if assets == 0 {
            return Err(error!(ErrorCodes::VaultZeroAssets));
        }

        vault.burn_shares(&owner, shares)?;
        send_assets(ctx, vault, &receiver, assets)?;

        emit!(LogWithdraw {
            sender: account,
            receiver,
            owner,
            assets,
            shares,
        });

        Ok(assets)
    })?;

    require_checks(ctx, &owner)?;
    Ok(assets)
}

pub fn transfer(ctx: &VaultContext, caller: Caller, to: Pubkey, shares: u128) -> Result<()> {
    let from = authenticate_caller(ctx, &caller)?;
    let now = ctx.now()?;

    ctx.non_reentrant(|vault| {
        vault.take_snapshot_once(now)?;
        vault.transfer_shares(&from, &to, shares)?;

        emit!(LogTransfer { from, to, shares });
        Ok(())
    })?;

    // shares leaving an account may be backing its debt elsewhere
    require_checks(ctx, &from)
}

/***********************************|
|            Borrowing               |
|__________________________________*/

pub fn borrow(ctx: &VaultContext, caller: Caller, assets: u128, receiver: Pubkey) -> Result<()> {
    let account = authenticate_caller_for_borrow(ctx, &caller)?;
    let receiver = resolve_receiver(ctx, &receiver);
    let now = ctx.now()?;

    ctx.non_reentrant(|vault| {
        vault.require_borrowable()?;
        vault.take_snapshot_once(now)?;

        if assets == 0 {
            return Err(error!(ErrorCodes::VaultZeroAssets));
        }

        vault.increase_owed(&account, assets)?;
        send_assets(ctx, vault, &receiver, assets)?;

        emit!(LogBorrow {
            account,
            receiver,
            assets,
        });

        Ok(())
    })?;

    require_checks(ctx, &account)
}

/// Pays back `assets` of the debt of `receiver`, which can be any account controlled by this vault.
pub fn repay(ctx: &VaultContext, caller: Caller, assets: u128, receiver: Pubkey) -> Result<()> {
    let account = authenticate_caller(ctx, &caller)?;
    require_controller(ctx, &receiver)?;
    let now = ctx.now()?;

    let debt_cleared = ctx.non_reentrant(|vault| {
        vault.require_borrowable()?;
        vault.take_snapshot_once(now)?;

        if assets == 0 {
            return Err(error!(ErrorCodes::VaultZeroAssets));
        }

        vault.decrease_owed(&receiver, assets)?;
        ctx.host
            .transfer_asset(&vault.asset, &account, &vault.address, assets)?;
        vault.add_assets_held(assets)?;

        emit!(LogRepay {
            sender: account,
            receiver,
            assets,
        });

        Ok(vault.debt_of(&receiver, now)? == 0)
    })?;

    if debt_cleared {
        ctx.host.release_controller(&ctx.vault, &receiver)?;
    }

    require_checks(ctx, &ADDRESS_DEAD)
}

/// Takes over `assets` of debt from another account controlled by this vault.
pub fn pull_debt(ctx: &VaultContext, caller: Caller, from: Pubkey, assets: u128) -> Result<()> {
    let account = authenticate_caller_for_borrow(ctx, &caller)?;
    if account == from {
        return Err(error!(ErrorCodes::VaultSelfDebtPull));
    }
    require_controller(ctx, &from)?;
    let now = ctx.now()?;

    let debt_cleared = ctx.non_reentrant(|vault| {
        vault.require_borrowable()?;
        vault.take_snapshot_once(now)?;

        if assets == 0 {
            return Err(error!(ErrorCodes::VaultZeroAssets));
        }

        vault.transfer_owed(&from, &account, assets)?;

        emit!(LogPullDebt {
            from,
            to: account,
            assets,
        });

        Ok(vault.debt_of(&from, now)? == 0)
    })?;

    if debt_cleared {
        ctx.host.release_controller(&ctx.vault, &from)?;
    }

    require_checks(ctx, &account)
}

/// Borrows `assets` and deposits them straight back, minting shares to `receiver`.
pub fn wind(ctx: &VaultContext, caller: Caller, assets: u128, receiver: Pubkey) -> Result<u128> {
    let account = authenticate_caller_for_borrow(ctx, &caller)?;
    let now = ctx.now()?;

    let shares = ctx.non_reentrant(|vault| {
        vault.require_borrowable()?;
        vault.take_snapshot_once(now)?;

        if assets == 0 {
            return Err(error!(ErrorCodes::VaultZeroAssets));
        }

        // priced before the new debt joins the total assets
        let shares = vault.preview_deposit(assets, now)?;
        if shares == 0 {
            return Err(error!(ErrorCodes::VaultZeroShares));
        }

        vault.mint_shares(&receiver, shares)?;
        vault.increase_owed(&account, assets)?;

        emit!(LogBorrow {
            account,
            receiver: vault.address,
            assets,
        });
        emit!(LogDeposit {
            sender: account,
            owner: receiver,
            assets,
            shares,
        });

        Ok(shares)
    })?;

    require_checks(ctx, &account)?;
    Ok(shares)
}

/// Burns shares worth `assets` from the caller and uses them to repay the debt of `debt_from`.
pub fn unwind(ctx: &VaultContext, caller: Caller, assets: u128, debt_from: Pubkey) -> Result<u128> {
    let account = authenticate_caller(ctx, &caller)?;
    require_controller(ctx, &debt_from)?;
    let now = ctx.now()?;

    let (shares, debt_cleared) = ctx.non_reentrant(|vault| {
        vault.require_borrowable()?;
        vault.take_snapshot_once(now)?;

        if assets == 0 {
            return Err(error!(ErrorCodes::VaultZeroAssets));
        }

        let shares = vault.preview_withdraw(assets, now)?;

        vault.burn_shares(&account, shares)?;
        vault.decrease_owed(&debt_from, assets)?;

        emit!(LogWithdraw {
            sender: account,
            receiver: vault.address,
            owner: account,
            assets,
            shares,
        });
        emit!(LogRepay {
            sender: account,
            receiver: debt_from,
            assets,
        });

        Ok((shares, vault.debt_of(&debt_from, now)? == 0))
    })?;

    if debt_cleared {
        ctx.host.release_controller(&ctx.vault, &debt_from)?;
    }

    require_checks(ctx, &account)?;
    Ok(shares)
}

/// Lets an account without debt leave the control of this vault.
pub fn disable_controller(ctx: &VaultContext, caller: Caller) -> Result<()> {
    let account = authenticate_caller(ctx, &caller)?;
    let now = ctx.now()?;

    ctx.non_reentrant(|vault| {
        if vault.debt_of(&account, now)? != 0 {
            return Err(error!(ErrorCodes::VaultOutstandingDebt));
        }
        Ok(())
    })?;

    ctx.host.release_controller(&ctx.vault, &account)
}

/***********************************|
|            Liquidation             |
|__________________________________*/

/// Repays `repay_assets` of the violator's debt by taking it over, and seizes
/// `collateral` shares worth the repaid value plus the incentive.
///
/// Returns the seized shares.
pub fn liquidate(
    ctx: &VaultContext,
    caller: Caller,
    violator: Pubkey,
    collateral: Pubkey,
    repay_assets: u128,
) -> Result<u128> {
    let liquidator = authenticate_caller_for_borrow(ctx, &caller)?;

    if liquidator == violator {
        return Err(error!(ErrorCodes::VaultSelfLiquidation));
    }
    if repay_assets == 0 {
        return Err(error!(ErrorCodes::VaultRepayAssetsInsufficient));
    }
    // a deferred check means the violator is mid batch and may still be made healthy
    if ctx.host.is_account_check_deferred(&violator) {
        return Err(error!(ErrorCodes::VaultViolatorStatusCheckDeferred));
    }
    require_controller(ctx, &violator)?;

    let now = ctx.now()?;
    let collaterals = ctx.host.get_collaterals(&violator);

    let (yield_shares, debt_cleared) = ctx.non_reentrant(|vault| {
        let config = vault.risk_config()?.clone();
        let collateral_factor = config.collateral_factor(&collateral);
        if collateral_factor == 0 {
            return Err(error!(ErrorCodes::VaultCollateralDisabled));
        }
        if collateral == vault.address && !ctx.host.is_collateral_enabled(&violator, &vault.address)
        {
            return Err(error!(ErrorCodes::VaultCollateralDisabled));
        }

        vault.take_snapshot_once(now)?;

        let AccountLiquidity {
            liability_assets,
            liability_value,
            collateral_value,
        } = calculate_liability_and_collateral(ctx, vault, &violator, &collaterals, now)?;

        if repay_assets > liability_assets {
            return Err(error!(ErrorCodes::VaultRepayAssetsExceeded));
        }

        let incentive = liquidation_incentive(liability_value, collateral_value)?;

        let repay_value =
            config
                .oracle
                .get_quote(repay_assets, &vault.asset, &config.reference_asset)?;
        let max_repay =
            max_repay_value(liability_value, collateral_value, collateral_factor, incentive)?;

        msg!(
            "Liquidation sizing: incentive {} repay value {} max {}",
            incentive,
            repay_value,
            max_repay
        );

        if repay_value > max_repay {
            let dust = repay_assets == liability_assets
                && config.dust_policy.allows_full_liquidation(
                    liability_assets,
                    liability_value,
                    max_repay,
                )?;
            if !dust {
                return Err(error!(ErrorCodes::VaultRepayAssetsExceeded));
            }
        }

        let seized_value = seize_value(repay_value, incentive)?;

        let yield_shares = if collateral == vault.address {
            seize_shares(ctx, &config, vault, seized_value, now)?
        } else {
            let collateral_vault = ctx.load_vault(&collateral)?;
            seize_shares(ctx, &config, &collateral_vault, seized_value, now)?
        };
        if yield_shares == 0 {
            return Err(error!(ErrorCodes::VaultRepayAssetsInsufficient));
        }

        vault.transfer_owed(&violator, &liquidator, repay_assets)?;

        if collateral == vault.address {
            vault.transfer_shares(&violator, &liquidator, yield_shares)?;

            let after =
                calculate_liability_and_collateral(ctx, vault, &violator, &collaterals, now)?;
            verify_not_over_liquidated(after.liability_value, after.collateral_value)?;
        } else {
            ctx.host.control_collateral(
                &vault.address,
                &violator,
                &collateral,
                CollateralCall::Transfer {
                    to: liquidator,
                    shares: yield_shares,
                },
            )?;

            // the share transfer scheduled a check of the violator, who is unhealthy by definition
            ctx.host.forgive_account_check(&vault.address, &violator)?;
        }

        emit!(LogLiquidate {
            liquidator,
            violator,
            collateral,
            repay_assets,
            yield_shares,
        });

        Ok((yield_shares, vault.debt_of(&violator, now)? == 0))
    })?;

    if debt_cleared {
        ctx.host.release_controller(&ctx.vault, &violator)?;
    }

    require_checks(ctx, &liquidator)?;
    Ok(yield_shares)
}

fn seize_shares(
    ctx: &VaultContext,
    config: &RiskConfig,
    collateral_vault: &Vault,
    seize_value: u128,
    now: u64,
) -> Result<u128> {
    let asset = collateral_vault.asset;
    let unit = unit_of(ctx.host.asset_decimals(&asset)?)?;
    let unit_price = config
        .oracle
        .get_quote(unit, &asset, &config.reference_asset)?;

    let assets = seize_assets(seize_value, unit, unit_price)?;
    collateral_vault.convert_to_shares(assets, Rounding::Floor, now)
}

fn send_assets(ctx: &VaultContext, vault: &mut Vault, receiver: &Pubkey, assets: u128) -> Result<()> {
    vault.remove_assets_held(assets)?;
    ctx.host
        .transfer_asset(&vault.asset, &vault.address, receiver, assets)
}
