//! Shared test utilities for mise integration tests.
//!
//! This module provides:
//! - `TestHarness` for isolated runs against a temporary events directory
//! - Builders for event documents

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::TestHarness;
