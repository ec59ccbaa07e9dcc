//! Dockgen Core - Foundational Types
//!
//! This module provides the shared types used across the dockgen workspace.

pub mod error;

// Re-export commonly used types
pub use error::{DockgenError, Result};

/// Dockgen version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
