//! Top-level manifest builder.

use dockgen_core::Result;

use crate::invoke::BuildInvoker;
use crate::sequence::{InstructionSet, Instructions};

/// Comment placed at the top of manifests created by
/// [`Dockerfile::with_banner`].
pub const GENERATED_BANNER: &str = "Do not edit this file directly. It is generated by dockgen.";

/// Fluent builder for a container image build manifest.
///
/// ```
/// use dockgen::{Dockerfile, Instructions, Step};
///
/// let mut deps = Step::new("deps", "Install dependencies");
/// deps.run("apk add --no-cache git");
///
/// let mut image = Dockerfile::new();
/// image.from("alpine:3.19").with_step(&deps).expose(8080);
///
/// assert_eq!(
///     image.render(),
///     "FROM alpine:3.19\n\n# deps\n# Install dependencies\nRUN apk add --no-cache git\nEXPOSE 8080"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dockerfile {
    set: InstructionSet,
}

impl Dockerfile {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a manifest that opens with the generated-file banner comment
    /// and a blank line.
    pub fn with_banner() -> Self {
        let mut dockerfile = Self::new();
        dockerfile.comment(GENERATED_BANNER);
        dockerfile.set.push(String::new());
        dockerfile
    }

    /// Render the manifest, persist it, and build it with a default
    /// [`BuildInvoker`] (`docker`, current working directory).
    ///
    /// Returns the builder again on success so calls can stay fluent.
    pub async fn build(&mut self, context: &str, tag: &str) -> Result<&mut Self> {
        BuildInvoker::default()
            .build(&self.render(), context, tag)
            .await?;
        Ok(self)
    }
}

impl Instructions for Dockerfile {
    fn instructions(&self) -> &InstructionSet {
        &self.set
    }

    fn instructions_mut(&mut self) -> &mut InstructionSet {
        &mut self.set
    }
}

impl std::fmt::Display for Dockerfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
