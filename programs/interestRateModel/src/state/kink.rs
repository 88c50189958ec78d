use anchor_lang::prelude::*;

use crate::constants::{FOUR_DECIMALS, MAX_RATE, TWELVE_DECIMALS};
use crate::errors::ErrorCodes;
use crate::events::{LogBorrowRateCap, LogUpdateRateDataV1, LogUpdateRateDataV2};
use crate::state::{yearly_to_per_second_rate, InterestRateModel, RateDataV1Params, RateDataV2Params};

use library::math::{casting::*, safe_math::*};

/// Piecewise linear borrow rate curve with one (v1) or two (v2) kinks.
///
/// Rates and kinks are yearly, in 1e2 percent: 100% = 10_000; 1% = 100.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KinkRateModel {
    pub version: u8,

    pub rate_at_zero: u16,
    pub kink1_utilization: u16,
    pub rate_at_kink1: u16,
    pub rate_at_max: u16,

    // v2 only
    pub kink2_utilization: u16,
    pub rate_at_kink2: u16,
}

impl KinkRateModel {
    pub fn v1(params: RateDataV1Params) -> Result<Self> {
        let mut model = Self::default();
        model.set_rate_v1(params)?;
        Ok(model)
    }

    pub fn v2(params: RateDataV2Params) -> Result<Self> {
        let mut model = Self::default();
        model.set_rate_v2(params)?;
        Ok(model)
    }

    pub fn set_rate_v1(&mut self, rate_data: RateDataV1Params) -> Result<()> {
        // kink at 0 or 100% would divide by zero; kink to max must not decline
        if rate_data.kink == 0
            || rate_data.kink >= FOUR_DECIMALS
            || rate_data.rate_at_utilization_kink > rate_data.rate_at_utilization_max
        {
            return err!(ErrorCodes::RateModelInvalidParams);
        }

        *self = Self {
            version: 1,
            rate_at_zero: rate_data.rate_at_utilization_zero.cast()?,
            kink1_utilization: rate_data.kink.cast()?,
            rate_at_kink1: rate_data.rate_at_utilization_kink.cast()?,
            rate_at_max: rate_data.rate_at_utilization_max.cast()?,
            ..Self::default()
        };

        emit!(LogUpdateRateDataV1 {
            kink: rate_data.kink,
            rate_at_utilization_zero: rate_data.rate_at_utilization_zero,
            rate_at_utilization_kink: rate_data.rate_at_utilization_kink,
            rate_at_utilization_max: rate_data.rate_at_utilization_max,
        });

        Ok(())
    }

    pub fn set_rate_v2(&mut self, rate_data: RateDataV2Params) -> Result<()> {
        if rate_data.kink1 == 0
            || rate_data.kink1 >= rate_data.kink2
            || rate_data.kink2 >= FOUR_DECIMALS
            || rate_data.rate_at_utilization_kink2 > rate_data.rate_at_utilization_max
        {
            return err!(ErrorCodes::RateModelInvalidParams);
        }

        *self = Self {
            version: 2,
            rate_at_zero: rate_data.rate_at_utilization_zero.cast()?,
            kink1_utilization: rate_data.kink1.cast()?,
            rate_at_kink1: rate_data.rate_at_utilization_kink1.cast()?,
            kink2_utilization: rate_data.kink2.cast()?,
            rate_at_kink2: rate_data.rate_at_utilization_kink2.cast()?,
            rate_at_max: rate_data.rate_at_utilization_max.cast()?,
        };

        emit!(LogUpdateRateDataV2 {
            kink1: rate_data.kink1,
            kink2: rate_data.kink2,
            rate_at_utilization_zero: rate_data.rate_at_utilization_zero,
            rate_at_utilization_kink1: rate_data.rate_at_utilization_kink1,
            rate_at_utilization_kink2: rate_data.rate_at_utilization_kink2,
            rate_at_utilization_max: rate_data.rate_at_utilization_max,
        });

        Ok(())
    }

    /// Curve points as `(utilization, rate)`, ordered by utilization.
    fn points(&self) -> Result<Vec<(u128, u128)>> {
        let mut points = vec![
            (0, self.rate_at_zero.cast()?),
            (self.kink1_utilization.cast()?, self.rate_at_kink1.cast()?),
        ];

        match self.version {
            1 => {}
            2 => points.push((self.kink2_utilization.cast()?, self.rate_at_kink2.cast()?)),
            _ => return err!(ErrorCodes::RateModelUnsupportedVersion),
        }

        points.push((FOUR_DECIMALS, self.rate_at_max.cast()?));
        Ok(points)
    }

    /// Yearly borrow rate in 1e2 percent, capped at [`MAX_RATE`].
    pub fn calc_borrow_rate_from_utilization(&self, utilization: u128) -> Result<u16> {
        let points = self.points()?;

        // the last segment also covers utilization above 100%
        let segment = points
            .windows(2)
            .find(|pair| utilization < pair[1].0)
            .or_else(|| points.windows(2).last())
            .ok_or(ErrorCodes::RateModelUnsupportedVersion)?;

        let ((x1, y1), (x2, y2)) = (segment[0], segment[1]);
        let rate = get_rate(y1, y2, x1, x2, utilization)?;

        if rate > MAX_RATE.cast()? {
            emit!(LogBorrowRateCap { utilization });
            return Ok(MAX_RATE);
        }

        Ok(rate.cast()?)
    }
}

impl InterestRateModel for KinkRateModel {
    fn compute_rate(&self, utilization: u128) -> Result<u128> {
        let yearly_rate = self.calc_borrow_rate_from_utilization(utilization)?;
        yearly_to_per_second_rate(yearly_rate.cast()?)
    }
}

/// y = m * x + c through (x1, y1) and (x2, y2), slope kept at 1e12 precision.
fn get_rate(y1: u128, y2: u128, x1: u128, x2: u128, utilization: u128) -> Result<u128> {
    // x2 > x1 is enforced when the curve is set, so the divisor is never zero
    let slope: i128 = y2
        .cast::<i128>()?
        .safe_sub(y1.cast()?)?
        .safe_mul(TWELVE_DECIMALS.cast()?)?
        .safe_div(x2.safe_sub(x1)?.cast()?)?;

    let constant: i128 = y1
        .cast::<i128>()?
        .safe_mul(TWELVE_DECIMALS.cast()?)?
        .safe_sub(slope.safe_mul(x1.cast()?)?)?;

    let rate: i128 = slope
        .safe_mul(utilization.cast()?)?
        .safe_add(constant)?
        .safe_div(TWELVE_DECIMALS.cast()?)?;

    if rate < 0 {
        return err!(ErrorCodes::RateModelBorrowRateNegative);
    }

    Ok(rate.cast()?)
}
