use anchor_lang::prelude::*;

use crate::constants::MAX_ASSET_DECIMALS;
use crate::errors::ErrorCodes;
use library::math::u256::safe_multiply_divide;

/// One whole unit of an asset with `decimals` decimals.
pub fn unit_of(decimals: u8) -> Result<u128> {
    if decimals > MAX_ASSET_DECIMALS {
        return err!(ErrorCodes::InvalidDecimals);
    }

    Ok(10u128.pow(decimals as u32))
}

/// `amount` of base converted with `price` = quote units per one whole base unit.
pub fn quote_direct(amount: u128, price: u128, base_decimals: u8) -> Result<u128> {
    if price == 0 {
        return err!(ErrorCodes::PriceNotValid);
    }

    Ok(safe_multiply_divide(amount, price, unit_of(base_decimals)?)?)
}

/// Inverse of [`quote_direct`]: `price` is base units per one whole quote unit.
pub fn quote_inverse(amount: u128, price: u128, quote_decimals: u8) -> Result<u128> {
    if price == 0 {
        return err!(ErrorCodes::PriceNotValid);
    }

    Ok(safe_multiply_divide(amount, unit_of(quote_decimals)?, price)?)
}
