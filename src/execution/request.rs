//! Execution request construction.

use std::path::PathBuf;

/// One command invocation, consumed by
/// [`CommandRunner::run`](super::CommandRunner::run).
///
/// The command vector is the executable name followed by its arguments.
/// Everything else is optional and set in the fluent style. Context the
/// completion handler needs travels inside the handler closure itself.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// Executable name followed by its arguments.
    pub command: Vec<String>,
    /// Working directory for the spawned process.
    pub working_dir: Option<PathBuf>,
    /// Encoding label tried when the output is not valid UTF-8.
    pub fallback_encoding: Option<String>,
    /// Bytes fed to the child's stdin.
    pub stdin: Option<Vec<u8>>,
    /// Status-line text override; defaults to the joined command vector.
    pub status_message: Option<String>,
    /// Suppress the status message entirely.
    pub silent: bool,
}

impl Request {
    /// Create a request for the given command vector.
    pub fn new<I, S>(command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the working directory for the spawned process.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Set the encoding tried when the output is not valid UTF-8.
    ///
    /// Takes a codec label such as `"ISO 8859-1"`; use
    /// [`codec_from_label`](crate::output::codec_from_label) to strip an
    /// editor-style descriptive wrapper first.
    pub fn fallback_encoding(mut self, label: impl Into<String>) -> Self {
        self.fallback_encoding = Some(label.into());
        self
    }

    /// Set bytes to feed to the child's stdin.
    pub fn stdin(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(payload.into());
        self
    }

    /// Override the transient status message shown at dispatch time.
    pub fn status_message(mut self, message: impl Into<String>) -> Self {
        self.status_message = Some(message.into());
        self
    }

    /// Suppress the status message for this invocation.
    pub fn silent(mut self) -> Self {
        self.silent = true;
        self
    }

    /// Command vector with empty and whitespace-only entries removed.
    pub(crate) fn filtered_command(&self) -> Vec<String> {
        self.command
            .iter()
            .filter(|arg| !arg.trim().is_empty())
            .cloned()
            .collect()
    }
}
