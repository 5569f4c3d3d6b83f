pub mod balance;
pub mod get;
pub mod insert;
pub mod remove;
pub mod update;
pub mod validate;
