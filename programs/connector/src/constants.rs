/// Bytes of an address shared by every sub-account of one owner
pub const ACCOUNT_PREFIX_LENGTH: usize = 31;

/// Sub-accounts per owner, the owner itself is sub-account 0
pub const MAX_SUB_ACCOUNTS: usize = 256;
