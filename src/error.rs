//! Error types for cmd-bridge.

use thiserror::Error;

/// Main error type for cmd-bridge operations.
#[derive(Error, Debug)]
pub enum CmdBridgeError {
    /// Command vector was empty after dropping blank entries.
    #[error("empty command: no non-blank arguments to execute")]
    EmptyCommand,

    /// I/O error while spawning or communicating with a subprocess.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for cmd-bridge operations.
pub type Result<T> = std::result::Result<T, CmdBridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_display() {
        let err = CmdBridgeError::EmptyCommand;
        assert!(err.to_string().contains("empty command"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: CmdBridgeError = io_err.into();
        assert!(matches!(err, CmdBridgeError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }
}
