pub mod constants;
pub mod errors;
pub mod events;
pub mod state;

pub use state::*;
