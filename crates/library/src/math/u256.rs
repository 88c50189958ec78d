//! 256-bit intermediates for `a * b / c` on u128 operands.
//!
//! Ray (1e27) arithmetic overflows u128 as soon as two ray values are multiplied,
//! so every mul-div in the vaults goes through the full 256-bit product here.

use anchor_lang::prelude::*;

use crate::errors::{ErrorCodes, FluidResult};

/// Rounding applied to the quotient of a mul-div.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
    Floor,
    Ceil,
}

/// Unsigned 256-bit value as two u128 limbs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct U256 {
    pub hi: u128,
    pub lo: u128,
}

const LOW_MASK: u128 = u64::MAX as u128;

impl U256 {
    pub const fn from_u128(value: u128) -> Self {
        Self { hi: 0, lo: value }
    }

    /// Full product of two u128 values, never overflows.
    pub fn full_mul(a: u128, b: u128) -> Self {
        let (a_hi, a_lo) = (a >> 64, a & LOW_MASK);
        let (b_hi, b_lo) = (b >> 64, b & LOW_MASK);

        let lo_lo = a_lo * b_lo;
        let hi_lo = a_hi * b_lo;
        let lo_hi = a_lo * b_hi;
        let hi_hi = a_hi * b_hi;

        // every partial fits in 128 bits; the middle column collects the carries
        let middle = (lo_lo >> 64) + (hi_lo & LOW_MASK) + (lo_hi & LOW_MASK);

        Self {
            hi: hi_hi + (hi_lo >> 64) + (lo_hi >> 64) + (middle >> 64),
            lo: (middle << 64) | (lo_lo & LOW_MASK),
        }
    }

    pub fn checked_add_u128(self, rhs: u128) -> Option<Self> {
        let (lo, carry) = self.lo.overflowing_add(rhs);
        let hi = self.hi.checked_add(carry as u128)?;
        Some(Self { hi, lo })
    }

    /// Returns `(quotient, remainder)`; fails when the quotient does not fit in u128.
    pub fn div_rem_u128(self, divisor: u128) -> FluidResult<(u128, u128)> {
        if divisor == 0 {
            return Err(ErrorCodes::LibraryDivisionByZero);
        }

        if self.hi >= divisor {
            return Err(ErrorCodes::LibraryU256NumberDownCastError);
        }

        if self.hi == 0 {
            return Ok((self.lo / divisor, self.lo % divisor));
        }

        // schoolbook long division over the low limb; hi < divisor keeps the quotient in 128 bits
        let mut remainder = self.hi;
        let mut quotient: u128 = 0;

        for bit in (0..128).rev() {
            let carry = remainder >> 127;
            remainder = (remainder << 1) | ((self.lo >> bit) & 1);

            if carry == 1 || remainder >= divisor {
                remainder = remainder.wrapping_sub(divisor);
                quotient |= 1 << bit;
            }
        }

        Ok((quotient, remainder))
    }
}

/// `a * b / c` with an explicit rounding direction.
pub fn mul_div(a: u128, b: u128, c: u128, rounding: Rounding) -> FluidResult<u128> {
    let (quotient, remainder) = U256::full_mul(a, b).div_rem_u128(c)?;

    match rounding {
        Rounding::Ceil if remainder != 0 => quotient
            .checked_add(1)
            .ok_or(ErrorCodes::LibraryU256NumberDownCastError),
        _ => Ok(quotient),
    }
}

/// `(a * b + c / 2) / c`, the half-up rounding used by ray exponentiation.
pub fn mul_div_half_up(a: u128, b: u128, c: u128) -> FluidResult<u128> {
    if c == 0 {
        return Err(ErrorCodes::LibraryDivisionByZero);
    }

    let product = U256::full_mul(a, b)
        .checked_add_u128(c / 2)
        .ok_or(ErrorCodes::LibraryMathError)?;

    Ok(product.div_rem_u128(c)?.0)
}

/// Floor of `a * b / c`.
pub fn safe_multiply_divide(a: u128, b: u128, c: u128) -> FluidResult<u128> {
    mul_div(a, b, c, Rounding::Floor)
}
