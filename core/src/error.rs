use thiserror::Error;

/// Dockgen error types
#[derive(Error, Debug)]
pub enum DockgenError {
    /// Local file I/O failed (e.g. the manifest could not be written)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The external build tool could not be launched
    #[error("Failed to spawn {program}: {message}")]
    SpawnError { program: String, message: String },

    /// The external build tool ran but reported a non-success exit status
    #[error("build failed")]
    BuildError,
}

/// Result type alias for dockgen operations
pub type Result<T> = std::result::Result<T, DockgenError>;
