use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod state;
pub mod utils;

pub use state::*;

declare_id!("2XjHjHgNaKPccDWcRntLiFHkaf77hrFNM9i5oVYpZanL");
