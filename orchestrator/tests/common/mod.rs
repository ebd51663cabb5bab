//! Common test utilities for orchestrator tests

#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
