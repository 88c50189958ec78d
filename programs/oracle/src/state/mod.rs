pub mod fixed_quote;
pub mod price_oracle;

pub use fixed_quote::*;
pub use price_oracle::*;
