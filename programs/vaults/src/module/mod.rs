pub mod admin;
pub mod status;
pub mod user;
pub mod view;
