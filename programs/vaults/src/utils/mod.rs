pub mod common;
pub mod liquidate;
pub mod validate;
pub mod valuation;

pub use liquidate::*;
pub use validate::*;
pub use valuation::*;
