pub mod constants;
pub mod errors;
pub mod events;
pub mod helper;
pub mod state;

pub use state::*;
