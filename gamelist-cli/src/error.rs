use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Configuration could not be resolved
    #[error("Config error: {0}")]
    Config(String),

    /// Snapshot could not be read or written
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Merge pipeline failed
    #[error("Merge failed: {0}")]
    Pipeline(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn snapshot(msg: impl Into<String>) -> Self {
        Self::Snapshot(msg.into())
    }

    pub(crate) fn pipeline(msg: impl Into<String>) -> Self {
        Self::Pipeline(msg.into())
    }
}
