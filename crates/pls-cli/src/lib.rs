//! Library components for the PLS auto-scoring CLI.

pub mod logging;
pub mod pipeline;
pub mod types;
