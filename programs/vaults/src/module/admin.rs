use anchor_lang::prelude::*;
use std::rc::Rc;

use crate::{
    constants::COLLATERAL_FACTOR_PRECISION,
    errors::ErrorCodes,
    events::*,
    state::*,
    utils::verify_owner,
};

use interest_rate_model::InterestRateModel;

pub fn set_supply_cap(ctx: &VaultContext, signer: &Pubkey, supply_cap: u128) -> Result<()> {
    ctx.non_reentrant(|vault| {
        verify_owner(vault, signer)?;

        vault.supply_cap = supply_cap;
        emit!(LogUpdateSupplyCap {
            vault: vault.address,
            supply_cap,
        });

        Ok(())
    })
}

pub fn set_borrow_cap(ctx: &VaultContext, signer: &Pubkey, borrow_cap: u128) -> Result<()> {
    ctx.non_reentrant(|vault| {
        verify_owner(vault, signer)?;
        vault.require_borrowable()?;

        vault.borrow_cap = borrow_cap;
        emit!(LogUpdateBorrowCap {
            vault: vault.address,
            borrow_cap,
        });

        Ok(())
    })
}

/// Percent of a collateral vault's value counted towards debt in this vault; 0 stops accepting it.
pub fn set_collateral_factor(
    ctx: &VaultContext,
    signer: &Pubkey,
    collateral: Pubkey,
    collateral_factor: u128,
) -> Result<()> {
    ctx.non_reentrant(|vault| {
        verify_owner(vault, signer)?;

        if collateral_factor > COLLATERAL_FACTOR_PRECISION {
            return Err(error!(ErrorCodes::VaultAdminInvalidCollateralFactor));
        }

        let address = vault.address;
        let config = vault.risk_config_mut()?;
        if collateral_factor == 0 {
            config.collateral_factors.remove(&collateral);
        } else {
            config
                .collateral_factors
                .insert(collateral, collateral_factor);
        }

        emit!(LogUpdateCollateralFactor {
            vault: address,
            collateral,
            collateral_factor,
        });

        Ok(())
    })
}

pub fn set_dust_policy(ctx: &VaultContext, signer: &Pubkey, dust_policy: DustPolicy) -> Result<()> {
    ctx.non_reentrant(|vault| {
        verify_owner(vault, signer)?;

        if let DustPolicy::LiabilityFraction { percent } = dust_policy {
            if u128::from(percent) > COLLATERAL_FACTOR_PRECISION {
                return Err(error!(ErrorCodes::VaultAdminInvalidParams));
            }
        }

        let address = vault.address;
        vault.risk_config_mut()?.dust_policy = dust_policy;

        emit!(LogUpdateDustPolicy {
            vault: address,
            dust_policy,
        });

        Ok(())
    })
}

/// Swaps the rate model. Interest up to now is settled at the old rate first.
pub fn set_interest_rate_model(
    ctx: &VaultContext,
    signer: &Pubkey,
    rate_model: Rc<dyn InterestRateModel>,
) -> Result<()> {
    let now = ctx.now()?;

    ctx.non_reentrant(|vault| {
        verify_owner(vault, signer)?;
        vault.risk_config()?;

        vault.accrue_interest(now)?;
        vault.risk_config_mut()?.rate_model = rate_model;
        vault.update_interest_rate()?;

        emit!(LogUpdateInterestRateModel {
            vault: vault.address,
        });

        Ok(())
    })
}

pub fn update_owner(ctx: &VaultContext, signer: &Pubkey, new_owner: Pubkey) -> Result<()> {
    ctx.non_reentrant(|vault| {
        verify_owner(vault, signer)?;

        if new_owner == Pubkey::default() {
            return Err(error!(ErrorCodes::VaultAdminInvalidParams));
        }

        vault.owner = new_owner;
        emit!(LogUpdateOwner {
            vault: vault.address,
            new_owner,
        });

        Ok(())
    })
}
