use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCodes {
    #[msg(RATE_MODEL_INVALID_PARAMS)]
    RateModelInvalidParams,

    #[msg(RATE_MODEL_UNSUPPORTED_VERSION)]
    RateModelUnsupportedVersion,

    #[msg(RATE_MODEL_BORROW_RATE_NEGATIVE)]
    RateModelBorrowRateNegative,

    #[msg(RATE_MODEL_UTILIZATION_OUT_OF_RANGE)]
    RateModelUtilizationOutOfRange,
}
