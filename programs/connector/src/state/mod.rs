pub mod checks;
pub mod connector;
pub mod registry;
pub mod token_book;

pub use checks::*;
pub use connector::*;
pub use registry::*;
pub use token_book::*;
