//! Domain types exposed by the directory service layer.

pub mod advocate;
pub mod filter;
pub mod types;
