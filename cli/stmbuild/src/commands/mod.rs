//! CLI command implementations.

pub mod check;
pub mod mcu;
pub mod resolve;
