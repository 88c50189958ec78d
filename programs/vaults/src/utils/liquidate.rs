use anchor_lang::prelude::*;

use crate::{
    constants::{COLLATERAL_FACTOR_PRECISION, MAX_LIQUIDATION_INCENTIVE, TARGET_HEALTH_FACTOR},
    errors::ErrorCodes,
};

use library::math::{safe_math::*, u256::safe_multiply_divide};

/// Bonus on the repaid value, in percent. Grows with how far the account is
/// under water: `100 - 100 * collateral / liability`, capped at [`MAX_LIQUIDATION_INCENTIVE`].
///
/// Only defined for unhealthy accounts, `collateral_value < liability_value`.
pub fn liquidation_incentive(liability_value: u128, collateral_value: u128) -> Result<u128> {
    if collateral_value >= liability_value {
        return Err(error!(ErrorCodes::VaultNoLiquidationOpportunity));
    }

    let health = safe_multiply_divide(
        collateral_value,
        COLLATERAL_FACTOR_PRECISION,
        liability_value,
    )?;

    Ok(COLLATERAL_FACTOR_PRECISION
        .safe_sub(health)?
        .min(MAX_LIQUIDATION_INCENTIVE))
}

/// Largest repay value after which the account sits at [`TARGET_HEALTH_FACTOR`].
///
/// Repaying `r` removes `r` of liability and `r * (100 + incentive) / 100`
/// of collateral weighted by `collateral_factor`; solving
/// `target * (liability - r) = 100 * (collateral - r * cf * (100 + incentive) / 100^2)` for `r`.
pub fn max_repay_value(
    liability_value: u128,
    collateral_value: u128,
    collateral_factor: u128,
    incentive: u128,
) -> Result<u128> {
    let numerator = TARGET_HEALTH_FACTOR
        .safe_mul(liability_value)?
        .safe_sub(COLLATERAL_FACTOR_PRECISION.safe_mul(collateral_value)?)?;

    let seized_weight = collateral_factor
        .safe_mul(COLLATERAL_FACTOR_PRECISION.safe_add(incentive)?)?
        .safe_div(COLLATERAL_FACTOR_PRECISION)?;
    let denominator = TARGET_HEALTH_FACTOR.safe_sub(seized_weight)?;

    Ok(numerator.safe_div(denominator)?)
}

/// Value of the collateral handed to the liquidator for `repay_value` of debt.
pub fn seize_value(repay_value: u128, incentive: u128) -> Result<u128> {
    Ok(safe_multiply_divide(
        repay_value,
        COLLATERAL_FACTOR_PRECISION.safe_add(incentive)?,
        COLLATERAL_FACTOR_PRECISION,
    )?)
}

/// Converts a reference asset value into collateral assets, given the quote of
/// one whole collateral unit.
pub fn seize_assets(seize_value: u128, collateral_unit: u128, unit_price: u128) -> Result<u128> {
    if unit_price == 0 {
        return Err(error!(ErrorCodes::VaultRepayAssetsInsufficient));
    }
    Ok(safe_multiply_divide(seize_value, collateral_unit, unit_price)?)
}

/// Rejects a same vault liquidation that leaves the violator above the target
/// health factor. A fully repaid liability is always accepted.
pub fn verify_not_over_liquidated(liability_value: u128, collateral_value: u128) -> Result<()> {
    if liability_value == 0 {
        return Ok(());
    }

    if collateral_value.safe_mul(COLLATERAL_FACTOR_PRECISION)?
        > liability_value.safe_mul(TARGET_HEALTH_FACTOR)?
    {
        msg!(
            "Over liquidation: collateral {} liability {}",
            collateral_value,
            liability_value
        );
        return Err(error!(ErrorCodes::VaultRepayAssetsExceeded));
    }

    Ok(())
}
