use anchor_lang::prelude::*;

use crate::{state::*, utils::*};

use library::math::u256::Rounding;

pub fn total_assets(ctx: &VaultContext) -> Result<u128> {
    ctx.load()?.total_assets(ctx.now()?)
}

pub fn total_supply(ctx: &VaultContext) -> Result<u128> {
    Ok(ctx.load()?.total_shares)
}

pub fn balance_of(ctx: &VaultContext, account: &Pubkey) -> Result<u128> {
    Ok(ctx.load()?.balance_of(account))
}

pub fn convert_to_shares(ctx: &VaultContext, assets: u128) -> Result<u128> {
    ctx.load()?
        .convert_to_shares(assets, Rounding::Floor, ctx.now()?)
}

pub fn convert_to_assets(ctx: &VaultContext, shares: u128) -> Result<u128> {
    ctx.load()?
        .convert_to_assets(shares, Rounding::Floor, ctx.now()?)
}

pub fn preview_deposit(ctx: &VaultContext, assets: u128) -> Result<u128> {
    ctx.load()?.preview_deposit(assets, ctx.now()?)
}

pub fn preview_mint(ctx: &VaultContext, shares: u128) -> Result<u128> {
    ctx.load()?.preview_mint(shares, ctx.now()?)
}

pub fn preview_withdraw(ctx: &VaultContext, assets: u128) -> Result<u128> {
    ctx.load()?.preview_withdraw(assets, ctx.now()?)
}

pub fn preview_redeem(ctx: &VaultContext, shares: u128) -> Result<u128> {
    ctx.load()?.preview_redeem(shares, ctx.now()?)
}

pub fn max_withdraw(ctx: &VaultContext, owner: &Pubkey) -> Result<u128> {
    ctx.load()?.max_withdraw(owner, ctx.now()?)
}

pub fn max_redeem(ctx: &VaultContext, owner: &Pubkey) -> Result<u128> {
    ctx.load()?.max_redeem(owner, ctx.now()?)
}

/// Debt with interest accrued up to the current timestamp.
pub fn debt_of(ctx: &VaultContext, account: &Pubkey) -> Result<u128> {
    ctx.load()?.debt_of(account, ctx.now()?)
}

pub fn total_borrowed(ctx: &VaultContext) -> Result<u128> {
    ctx.load()?.total_borrowed_at(ctx.now()?)
}

pub fn interest_rate(ctx: &VaultContext) -> Result<u128> {
    Ok(ctx.load()?.interest.interest_rate)
}

pub fn interest_accumulator(ctx: &VaultContext) -> Result<u128> {
    let (_, accumulator) = ctx.load()?.accrued_interest(ctx.now()?)?;
    Ok(accumulator)
}

pub fn collateral_factor(ctx: &VaultContext, collateral: &Pubkey) -> Result<u128> {
    Ok(ctx.load()?.risk_config()?.collateral_factor(collateral))
}

/// Liability and risk adjusted collateral of `account`, over its enabled collaterals.
pub fn account_liquidity(ctx: &VaultContext, account: &Pubkey) -> Result<AccountLiquidity> {
    let vault = ctx.load()?;
    let collaterals = ctx.host.get_collaterals(account);

    calculate_liability_and_collateral(ctx, &vault, account, &collaterals, ctx.now()?)
}
