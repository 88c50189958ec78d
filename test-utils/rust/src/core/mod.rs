//! Core environment functionality

pub mod env;
pub mod state;

pub use env::{Env, Snapshot};
pub use state::StateManager;
