//! Orchestrator services implementations

pub mod backend_client;
pub mod terminal_presenter;

#[cfg(test)]
pub mod tests;

pub use backend_client::*;
pub use terminal_presenter::*;
