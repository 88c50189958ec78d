//! Testing helpers and utilities

pub mod assertions;
pub mod tokens;

pub use assertions::{Assertions, ExpectRevertExt, ExpectRevertResultExt, RevertInfo};
pub use tokens::TokenHelper;
