//! Tests for producer services
//!
//! HTTP providers run against a local wiremock server; workflow and session
//! handling run against mockall doubles of the provider trait.

pub mod openai_provider;
