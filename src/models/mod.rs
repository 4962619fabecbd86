//! Database and configuration models.

#[cfg(feature = "data")]
pub mod advocate;
pub mod config;
