//! Tests for orchestrator services
