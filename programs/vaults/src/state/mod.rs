pub mod context;
pub mod debt_ledger;
pub mod interest;
pub mod risk;
pub mod snapshot;
pub mod vault_state;

pub use context::*;
pub use debt_ledger::*;
pub use interest::*;
pub use risk::*;
pub use snapshot::*;
pub use vault_state::*;
