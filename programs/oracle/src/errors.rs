use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCodes {
    #[msg(PRICE_NOT_VALID)]
    PriceNotValid,

    #[msg(PRICE_NOT_FOUND)]
    PriceNotFound,

    #[msg(INVALID_PARAMS)]
    InvalidParams,

    #[msg(INVALID_DECIMALS)]
    InvalidDecimals,

    #[msg(ORACLE_ADMIN_ONLY_AUTHORITY)]
    OracleAdminOnlyAuthority,
}
