//! Dockgen - fluent container-manifest generation.
//!
//! Accumulates ordered build instructions through a chainable API, renders
//! them as a Dockerfile, and optionally hands the result to an external
//! docker-compatible build tool as a subprocess.
//!
//! # Usage
//!
//! ```
//! use dockgen::{Dockerfile, Instructions};
//!
//! let mut image = Dockerfile::new();
//! image
//!     .from("node:18-alpine")
//!     .run("apk add --no-cache git")
//!     .expose(8080);
//!
//! assert_eq!(
//!     image.render(),
//!     "FROM node:18-alpine\nRUN apk add --no-cache git\nEXPOSE 8080"
//! );
//! ```
//!
//! Building hands the rendered manifest to the external tool:
//!
//! ```no_run
//! # async fn demo() -> dockgen::Result<()> {
//! # let mut image = dockgen::Dockerfile::new();
//! image.build(".", "myimage:latest").await?;
//! # Ok(())
//! # }
//! ```

pub mod dockerfile;
pub mod invoke;
pub mod sequence;
pub mod step;

// Re-export common types
pub use dockerfile::{Dockerfile, GENERATED_BANNER};
pub use invoke::{BuildInvoker, MANIFEST_FILENAME};
pub use sequence::{CommandForm, InstructionSet, Instructions};
pub use step::Step;

pub use dockgen_core::{DockgenError, Result};

/// Dockgen version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
