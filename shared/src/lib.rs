//! Shared types for the FAQ generation system
//!
//! Contains the wire types exchanged between the generation orchestrator and
//! the fallback backend, plus the logging setup both binaries use.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
