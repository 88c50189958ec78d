pub mod fixed;
pub mod kink;
pub mod model;
pub mod structs;

pub use fixed::*;
pub use kink::*;
pub use model::*;
pub use structs::*;
