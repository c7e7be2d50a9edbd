//! solace-chat
//!
//! Client for the practice's support-chat backend. The backend owns the
//! conversation — session creation, replies, and crisis detection — and
//! this crate is the website's typed boundary to it.

pub mod client;
pub mod context;
pub mod error;
