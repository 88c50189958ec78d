use anchor_lang::prelude::*;

pub type FluidResult<T = ()> = std::result::Result<T, ErrorCodes>;

#[error_code]
pub enum ErrorCodes {
    #[msg(LIBRARY_MATH_ERROR)]
    LibraryMathError,

    #[msg(LIBRARY_CASTING_ERROR)]
    LibraryCastingFailure,

    #[msg(LIBRARY_DIVISION_BY_ZERO)]
    LibraryDivisionByZero,

    #[msg(LIBRARY_U256_NUMBER_DOWN_CAST_ERROR)]
    LibraryU256NumberDownCastError,

    #[msg(LIBRARY_RPOW_OVERFLOW)]
    LibraryRpowOverflow,
}
