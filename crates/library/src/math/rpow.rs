use crate::errors::{ErrorCodes, FluidResult};
use crate::math::u256::mul_div_half_up;

/// `x^n` where `x` and the result are fixed point numbers scaled by `base`.
///
/// Exponentiation by squaring; every intermediate product is rounded half up
/// at `base` precision, so results match the usual ray `rpow` bit for bit.
pub fn rpow(x: u128, n: u128, base: u128) -> FluidResult<u128> {
    if base == 0 {
        return Err(ErrorCodes::LibraryDivisionByZero);
    }

    if x == 0 {
        return Ok(if n == 0 { base } else { 0 });
    }

    let mut x = x;
    let mut z = if n % 2 == 0 { base } else { x };
    let mut n = n / 2;

    while n > 0 {
        x = mul_div_half_up(x, x, base).map_err(|_| ErrorCodes::LibraryRpowOverflow)?;

        if n % 2 == 1 {
            z = mul_div_half_up(z, x, base).map_err(|_| ErrorCodes::LibraryRpowOverflow)?;
        }

        n /= 2;
    }

    Ok(z)
}
