use anchor_lang::prelude::*;

use crate::{
    constants::{COLLATERAL_FACTOR_PRECISION, SELF_COLLATERAL_LTV},
    errors::ErrorCodes,
    invokes::Caller,
    state::*,
    utils::*,
};

use library::math::{safe_math::*, u256::Rounding};

/// Deferred vault check, run by the connector once per batch for every vault
/// that asked for it. Consumes the batch snapshot, commits interest and the
/// next rate, and enforces the caps against the snapshot.
pub fn check_vault_status(ctx: &VaultContext, caller: Caller) -> Result<()> {
    verify_status_check_caller(ctx, &caller)?;
    let now = ctx.now()?;

    ctx.non_reentrant(|vault| {
        let old = vault.consume_snapshot()?;

        vault.accrue_interest(now)?;
        vault.update_interest_rate()?;

        let supply_assets = vault.convert_to_assets(vault.total_shares, Rounding::Floor, now)?;
        let total_borrowed = vault.ledger.total_borrowed;

        // caps only stop growth, a vault already above its cap can still shrink
        if exceeds_cap(vault.supply_cap, old.supply_assets, supply_assets) {
            msg!(
                "Supply cap {} exceeded: {} -> {}",
                vault.supply_cap,
                old.supply_assets,
                supply_assets
            );
            return Err(error!(ErrorCodes::VaultSupplyCapExceeded));
        }

        if exceeds_cap(vault.borrow_cap, old.total_borrowed, total_borrowed) {
            msg!(
                "Borrow cap {} exceeded: {} -> {}",
                vault.borrow_cap,
                old.total_borrowed,
                total_borrowed
            );
            return Err(error!(ErrorCodes::VaultBorrowCapExceeded));
        }

        Ok(())
    })
}

fn exceeds_cap(cap: u128, old: u128, new: u128) -> bool {
    cap != 0 && new > cap && new > old
}

/// Deferred account check, run by the connector on the controller of `account`.
pub fn check_account_status(
    ctx: &VaultContext,
    caller: Caller,
    account: Pubkey,
    collaterals: &[Pubkey],
) -> Result<()> {
    verify_status_check_caller(ctx, &caller)?;
    let now = ctx.now()?;
    let vault = ctx.load()?;

    match vault.kind {
        VaultKind::Simple => Ok(()),
        VaultKind::SimpleBorrowable => check_self_collateralized(&vault, &account, collaterals, now),
        VaultKind::RegularBorrowable(_) => {
            let liquidity =
                calculate_liability_and_collateral(ctx, &vault, &account, collaterals, now)?;

            if !liquidity.is_healthy() {
                msg!(
                    "Account {} unhealthy: liability {} collateral {}",
                    account,
                    liquidity.liability_value,
                    liquidity.collateral_value
                );
                return Err(error!(ErrorCodes::VaultAccountUnhealthy));
            }

            Ok(())
        }
    }
}

/// Debt must be backed by the account's own shares in this vault, at [`SELF_COLLATERAL_LTV`].
fn check_self_collateralized(
    vault: &Vault,
    account: &Pubkey,
    collaterals: &[Pubkey],
    now: u64,
) -> Result<()> {
    let debt = vault.debt_of(account, now)?;
    if debt == 0 {
        return Ok(());
    }

    if !collaterals.contains(&vault.address) {
        return Err(error!(ErrorCodes::VaultAccountUnhealthy));
    }

    let collateral = vault.convert_to_assets(vault.balance_of(account), Rounding::Floor, now)?;
    let max_debt = collateral
        .safe_mul(SELF_COLLATERAL_LTV)?
        .safe_div(COLLATERAL_FACTOR_PRECISION)?;

    if debt > max_debt {
        return Err(error!(ErrorCodes::VaultAccountUnhealthy));
    }

    Ok(())
}
