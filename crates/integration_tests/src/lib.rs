//! Integration testing library for Flip Menu.
//!
//! Provides a file-backed test environment: a temporary directory holding a
//! settings file and a catalog file, wired into the API exactly as the
//! server binary wires them.

pub mod environment;
pub mod fixtures;

// Re-export commonly used types for convenience
pub use environment::{Reply, TestEnvironment};
