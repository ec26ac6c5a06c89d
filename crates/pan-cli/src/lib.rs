//! CLI library components for the PAN validator.

pub mod logging;
pub mod pipeline;
pub mod types;
