//! CLI error types.

use crate::config::ConfigError;
use thiserror::Error;

/// CLI errors.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Configuration is invalid or could not be read.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The entry catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] catalog::Error),

    /// The MCP server stopped with a transport failure.
    #[error(transparent)]
    Mcp(#[from] mcp::Error),

    /// Output could not be serialized.
    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
