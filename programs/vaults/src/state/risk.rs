use anchor_lang::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::constants::COLLATERAL_FACTOR_PRECISION;

use interest_rate_model::InterestRateModel;
use library::math::safe_math::*;
use oracle::PriceOracle;

/// When a liquidation may repay more than the health-restoring amount.
///
/// Only full liquidations qualify: the repay must clear the whole liability.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DustPolicy {
    /// Liabilities of at most `assets` may always be cleared in full
    HardThreshold { assets: u128 },
    /// Full clearing is allowed once the health-restoring repay reaches `percent` of the liability value
    LiabilityFraction { percent: u8 },
}

impl Default for DustPolicy {
    fn default() -> Self {
        DustPolicy::HardThreshold { assets: 0 }
    }
}

impl DustPolicy {
    pub fn allows_full_liquidation(
        &self,
        liability_assets: u128,
        liability_value: u128,
        max_repay_value: u128,
    ) -> Result<bool> {
        Ok(match *self {
            DustPolicy::HardThreshold { assets } => liability_assets <= assets,
            DustPolicy::LiabilityFraction { percent } => {
                max_repay_value.safe_mul(COLLATERAL_FACTOR_PRECISION)?
                    >= liability_value.safe_mul(percent.into())?
            }
        })
    }
}

/// Pricing and rate configuration of a regular borrowable vault.
#[derive(Clone)]
pub struct RiskConfig {
    pub oracle: Rc<dyn PriceOracle>,
    pub rate_model: Rc<dyn InterestRateModel>,
    /// unit of account liabilities and collaterals are valued in
    pub reference_asset: Pubkey,
    /// collateral vault => factor in percent; missing or 0 means not accepted
    pub collateral_factors: BTreeMap<Pubkey, u128>,
    pub dust_policy: DustPolicy,
}

impl RiskConfig {
    pub fn new(
        oracle: Rc<dyn PriceOracle>,
        rate_model: Rc<dyn InterestRateModel>,
        reference_asset: Pubkey,
    ) -> Self {
        Self {
            oracle,
            rate_model,
            reference_asset,
            collateral_factors: BTreeMap::new(),
            dust_policy: DustPolicy::default(),
        }
    }

    pub fn collateral_factor(&self, collateral: &Pubkey) -> u128 {
        self.collateral_factors.get(collateral).copied().unwrap_or(0)
    }
}

impl fmt::Debug for RiskConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiskConfig")
            .field("reference_asset", &self.reference_asset)
            .field("collateral_factors", &self.collateral_factors)
            .field("dust_policy", &self.dust_policy)
            .finish_non_exhaustive()
    }
}
