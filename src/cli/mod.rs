//! Command-line surface for formatting payloads and managing history
pub mod commands;

pub use commands::run;
