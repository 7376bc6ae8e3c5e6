//! Utility library for the MANET flow analysis

pub mod address;
pub mod serde;
