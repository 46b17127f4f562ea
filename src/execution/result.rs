//! Completion payloads delivered to the caller's handler.

/// Outcome of one command invocation.
///
/// A tagged union rather than a dual-purpose payload: handlers
/// pattern-match instead of inspecting the value's type. Exactly one
/// `Completion` reaches the handler per invocation, and the runner keeps
/// no reference to it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Decoded combined stdout+stderr of a process that exited cleanly.
    /// Empty string when the process produced no output.
    Output(String),
    /// Status code of a process that ran but exited non-zero.
    ExitCode(i32),
}

impl Completion {
    /// The decoded output, if the process exited cleanly.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Output(text) => Some(text),
            Self::ExitCode(_) => None,
        }
    }

    /// The exit status, if the process exited non-zero.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Output(_) => None,
            Self::ExitCode(code) => Some(*code),
        }
    }

    /// Whether this is a clean-exit result carrying output.
    pub fn is_output(&self) -> bool {
        matches!(self, Self::Output(_))
    }
}
