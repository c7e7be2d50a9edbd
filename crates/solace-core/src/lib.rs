//! solace-core
//!
//! Pure domain types for the Solace assessment platform. No I/O, no HTTP
//! dependency — this is the shared vocabulary of the Solace system.

pub mod error;
pub mod models;
