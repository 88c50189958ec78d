pub mod builder;
pub mod core;
pub mod errors;
pub mod helpers;

pub mod prelude {
    pub use crate::builder::EnvironmentBuilder;
    pub use crate::core::{Env, Snapshot, StateManager};
    pub use crate::errors::{EnvError, ResultExt};
    pub use crate::helpers::{
        assertions::assert_approx_eq, Assertions, ExpectRevertExt, ExpectRevertResultExt,
        RevertInfo, TokenHelper,
    };

    pub use anchor_lang::prelude::Pubkey;

    /// 1e18, one whole unit of an 18 decimals asset
    pub const E18: u128 = 1_000_000_000_000_000_000;

    /// Time constants for convenience
    pub mod time {
        pub const SECOND: i64 = 1;
        pub const MINUTE: i64 = 60;
        pub const HOUR: i64 = 3600;
        pub const DAY: i64 = 86400;
        pub const WEEK: i64 = 604800;
        pub const YEAR: i64 = 31536000;
    }
}

pub use builder::EnvironmentBuilder;
pub use core::{Env, StateManager};
pub use errors::{EnvError, Result};
