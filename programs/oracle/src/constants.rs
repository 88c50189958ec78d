/// Largest decimals an asset may declare; 10^38 is the last power of ten below u128::MAX.
pub const MAX_ASSET_DECIMALS: u8 = 38;

/// Decimals used when an asset has not been registered with the oracle.
pub const DEFAULT_ASSET_DECIMALS: u8 = 18;
