//! External build-tool invocation.
//!
//! Persists a rendered manifest to the well-known filename and hands it to
//! the external image build tool as a subprocess. Both output streams are
//! captured (buffered, never inherited) and relayed only after the tool
//! exits; there is no cancellation or timeout.

use std::path::PathBuf;

use tokio::process::Command;

use dockgen_core::{DockgenError, Result};

/// Well-known manifest filename handed to the build tool.
pub const MANIFEST_FILENAME: &str = "Dockerfile";

/// Captured outcome of one external tool invocation.
#[derive(Debug)]
struct ToolOutput {
    success: bool,
    stdout: String,
    stderr: String,
}

/// Invokes the external image build tool against a rendered manifest.
///
/// One invocation writes exactly one manifest file and spawns exactly one
/// subprocess. The manifest filename is fixed, so concurrent builds need
/// distinct invokers with distinct working directories; the file is written
/// unlocked, last writer wins.
#[derive(Debug, Clone)]
pub struct BuildInvoker {
    /// Build tool executable. Any docker-compatible CLI works.
    pub program: String,
    /// Directory the manifest is written into; also the child's working
    /// directory.
    pub dir: PathBuf,
    /// Suppress output relay on the success path.
    pub quiet: bool,
}

impl Default for BuildInvoker {
    fn default() -> Self {
        Self {
            program: "docker".to_string(),
            dir: PathBuf::from("."),
            quiet: false,
        }
    }
}

impl BuildInvoker {
    /// Build an image from a rendered manifest.
    ///
    /// # Process
    ///
    /// 1. Write `manifest` to `<dir>/Dockerfile`, overwriting any existing
    ///    file
    /// 2. Spawn `<program> build <context> -t <tag> -f Dockerfile` with both
    ///    output streams captured
    /// 3. Wait for the tool to exit
    /// 4. On non-success exit, relay the tool's stderr and return
    ///    [`DockgenError::BuildError`]; on success relay both streams and
    ///    confirm the tag
    ///
    /// A write failure aborts before any subprocess is spawned; a launch
    /// failure surfaces as [`DockgenError::SpawnError`].
    pub async fn build(&self, manifest: &str, context: &str, tag: &str) -> Result<()> {
        let manifest_path = self.dir.join(MANIFEST_FILENAME);
        tokio::fs::write(&manifest_path, manifest).await?;
        tracing::debug!(
            path = %manifest_path.display(),
            bytes = manifest.len(),
            "Manifest written"
        );

        let output = self
            .run_tool(&["build", context, "-t", tag, "-f", MANIFEST_FILENAME])
            .await?;

        if !output.success {
            if !output.stderr.is_empty() {
                eprint!("{}", output.stderr);
            }
            return Err(DockgenError::BuildError);
        }

        if !self.quiet {
            if !output.stdout.is_empty() {
                print!("{}", output.stdout);
            }
            if !output.stderr.is_empty() {
                eprint!("{}", output.stderr);
            }
            println!("Successfully built {tag}");
        }

        Ok(())
    }

    /// Run the build tool to completion, capturing both output streams.
    async fn run_tool(&self, args: &[&str]) -> Result<ToolOutput> {
        tracing::debug!(program = %self.program, ?args, "Spawning build tool");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.dir)
            .output()
            .await
            .map_err(|e| DockgenError::SpawnError {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        Ok(ToolOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
