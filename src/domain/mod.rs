//! Domain entities and the rules that keep them valid.

pub mod account;
pub mod contact;
pub mod types;
