//! solace-storage
//!
//! Client for the persistence backend that stores completed assessment
//! sessions and the contact requests linked to them. Thin wrapper around
//! its REST surface; the row types live in solace-core.

pub mod client;
pub mod error;
pub mod paths;
