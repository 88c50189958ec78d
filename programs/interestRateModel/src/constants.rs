/// Ray precision of per-second rates
pub const ONE: u128 = 10u128.pow(27); // 1e27

pub const SECONDS_PER_YEAR: u128 = 31_536_000; // 365 * 24 * 60 * 60

pub const FOUR_DECIMALS: u128 = 10u128.pow(4); // 1e4

pub const TWELVE_DECIMALS: u128 = 10u128.pow(12); // 1e12

/// Hard cap for yearly borrow rates, in 1e2 percent (655.35%)
pub const MAX_RATE: u16 = u16::MAX;
