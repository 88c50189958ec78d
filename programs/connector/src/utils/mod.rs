pub mod sub_account;

pub use sub_account::*;
