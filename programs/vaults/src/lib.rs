pub mod constants;
pub mod errors;
pub mod events;
pub mod invokes;
pub mod module;
pub mod state;
pub mod utils;

pub use state::*;
