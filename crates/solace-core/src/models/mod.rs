pub mod contact;
pub mod result;
pub mod session;
