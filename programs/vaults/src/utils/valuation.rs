use anchor_lang::prelude::*;

use crate::{
    constants::COLLATERAL_FACTOR_PRECISION,
    state::{RiskConfig, Vault, VaultContext},
};

use library::math::{safe_math::*, u256::Rounding};

/// An account's position in a regular borrowable vault, values in the reference asset.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccountLiquidity {
    pub liability_assets: u128,
    pub liability_value: u128,
    /// already weighted by the collateral factors
    pub collateral_value: u128,
}

impl AccountLiquidity {
    pub fn is_healthy(&self) -> bool {
        self.liability_value <= self.collateral_value
    }
}

/// Values the debt of `account` in `vault` and the risk adjusted sum of its
/// `collaterals`. Collaterals without a factor contribute nothing.
///
/// `vault` is passed in because it may already be borrowed mutably by the
/// caller; it is used whenever it appears among the collaterals.
pub fn calculate_liability_and_collateral(
    ctx: &VaultContext,
    vault: &Vault,
    account: &Pubkey,
    collaterals: &[Pubkey],
    now: u64,
) -> Result<AccountLiquidity> {
    let config = vault.risk_config()?;

    let liability_assets = vault.debt_of(account, now)?;
    let liability_value = if liability_assets == 0 {
        0
    } else {
        config
            .oracle
            .get_quote(liability_assets, &vault.asset, &config.reference_asset)?
    };

    let mut collateral_value: u128 = 0;
    for collateral in collaterals {
        let collateral_factor = config.collateral_factor(collateral);
        if collateral_factor == 0 {
            continue;
        }

        let value = if *collateral == vault.address {
            collateral_value_of(config, vault, account, collateral_factor, now)?
        } else {
            let collateral_vault = ctx.load_vault(collateral)?;
            collateral_value_of(config, &collateral_vault, account, collateral_factor, now)?
        };

        collateral_value = collateral_value.safe_add(value)?;
    }

    Ok(AccountLiquidity {
        liability_assets,
        liability_value,
        collateral_value,
    })
}

fn collateral_value_of(
    config: &RiskConfig,
    collateral: &Vault,
    account: &Pubkey,
    collateral_factor: u128,
    now: u64,
) -> Result<u128> {
    let shares = collateral.balance_of(account);
    if shares == 0 {
        return Ok(0);
    }

    let assets = collateral.convert_to_assets(shares, Rounding::Floor, now)?;
    let value = config
        .oracle
        .get_quote(assets, &collateral.asset, &config.reference_asset)?;

    Ok(value
        .safe_mul(collateral_factor)?
        .safe_div(COLLATERAL_FACTOR_PRECISION)?)
}
