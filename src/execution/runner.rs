//! Background-unit command execution.

use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread;

use tracing::{debug, error};

use super::request::Request;
use super::result::Completion;
use crate::dispatch::Dispatcher;
use crate::error::{CmdBridgeError, Result};
use crate::host::Host;
use crate::output;

/// Fixed alert prefix for a missing executable.
const NOT_FOUND_MESSAGE: &str = "tool not found";

/// Launches commands on dedicated background threads and delivers each
/// result to the controlling thread through the injected [`Dispatcher`].
///
/// The runner itself holds no per-invocation state; every call to
/// [`run`](Self::run) gets its own independent background unit. Units
/// never coordinate: no queue, no concurrency limit, and no completion
/// ordering across invocations.
pub struct CommandRunner {
    dispatcher: Arc<dyn Dispatcher>,
    host: Arc<dyn Host>,
}

impl CommandRunner {
    /// Create a runner bound to the host's scheduler and notification
    /// surface.
    pub fn new(dispatcher: Arc<dyn Dispatcher>, host: Arc<dyn Host>) -> Self {
        Self { dispatcher, host }
    }

    /// Start one background unit for `request`. Fire-and-forget.
    ///
    /// Returns synchronously; `on_done` runs later on the controlling
    /// thread with the invocation's [`Completion`]. A command vector that
    /// is empty after dropping blank entries is a usage error: `run`
    /// returns [`CmdBridgeError::EmptyCommand`] and spawns nothing.
    ///
    /// There is no timeout and no cancellation: a subprocess that never
    /// exits keeps its background unit alive indefinitely.
    pub fn run<F>(&self, request: Request, on_done: F) -> Result<()>
    where
        F: FnOnce(Completion) + Send + 'static,
    {
        let command = request.filtered_command();
        if command.is_empty() {
            return Err(CmdBridgeError::EmptyCommand);
        }

        if !request.silent {
            let status = request
                .status_message
                .clone()
                .unwrap_or_else(|| command.join(" "));
            self.host.status(&status);
        }

        let unit = BackgroundUnit {
            command,
            working_dir: request.working_dir,
            fallback_encoding: request.fallback_encoding,
            stdin: request.stdin,
            dispatcher: Arc::clone(&self.dispatcher),
            host: Arc::clone(&self.host),
        };

        thread::Builder::new()
            .name(format!("cmd-bridge:{}", unit.command[0]))
            .spawn(move || unit.execute(on_done))?;

        Ok(())
    }
}

/// One subprocess invocation, spawn to hand-off.
///
/// Lives for exactly one command; created on dispatch, gone once the
/// result has been scheduled onto the controlling thread.
struct BackgroundUnit {
    // Non-empty: validated in `CommandRunner::run`.
    command: Vec<String>,
    working_dir: Option<PathBuf>,
    fallback_encoding: Option<String>,
    stdin: Option<Vec<u8>>,
    dispatcher: Arc<dyn Dispatcher>,
    host: Arc<dyn Host>,
}

impl BackgroundUnit {
    /// Run the subprocess to completion and schedule the hand-off.
    ///
    /// A missing executable bypasses `on_done` entirely and raises the
    /// host's fatal alert instead. Any other spawn/wait failure terminates
    /// the unit abnormally; the panic hook is the crash-log backstop.
    fn execute<F>(self, on_done: F)
    where
        F: FnOnce(Completion) + Send + 'static,
    {
        let command_line = self.command.join(" ");

        match self.invoke() {
            Ok(completion) => {
                debug!(command = %command_line, "command unit completed");
                self.dispatcher.schedule(Box::new(move || on_done(completion)));
            }
            Err(CmdBridgeError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                debug!(command = %command_line, "executable not found");
                let message = format!("{NOT_FOUND_MESSAGE}: {}", self.command[0]);
                let host = Arc::clone(&self.host);
                self.dispatcher
                    .schedule(Box::new(move || host.fatal(&message)));
            }
            Err(err) => {
                error!(command = %command_line, error = %err, "command unit failed");
                panic!("command unit failed: {err}");
            }
        }
    }

    /// Spawn, feed stdin, and wait for exit.
    ///
    /// The working directory is applied on the spawn call itself, never by
    /// mutating the process-wide current directory, so concurrently running
    /// units each observe their own.
    fn invoke(&self) -> Result<Completion> {
        let mut command = Command::new(&self.command[0]);
        command
            .args(&self.command[1..])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if self.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });

        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let mut child = command.spawn()?;

        // Feed stdin from a helper thread so a child that fills its output
        // pipes before draining stdin cannot deadlock the unit. The child
        // may also exit without reading at all, hence the ignored result.
        let feeder = self.stdin.clone().zip(child.stdin.take()).map(
            |(payload, mut pipe)| {
                thread::spawn(move || {
                    let _ = pipe.write_all(&payload);
                })
            },
        );

        let captured = child.wait_with_output()?;

        if let Some(handle) = feeder {
            let _ = handle.join();
        }

        if !captured.status.success() {
            // A signal-killed child has no code on Unix; -1 stands in.
            let code = captured.status.code().unwrap_or(-1);
            return Ok(Completion::ExitCode(code));
        }

        let mut combined = captured.stdout;
        combined.extend_from_slice(&captured.stderr);
        Ok(Completion::Output(output::normalize(
            &combined,
            self.fallback_encoding.as_deref(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::dispatch::Task;

    struct DroppingDispatcher;

    impl Dispatcher for DroppingDispatcher {
        fn schedule(&self, _task: Task) {}
    }

    #[derive(Default)]
    struct RecordingHost {
        statuses: Mutex<Vec<String>>,
        fatals: Mutex<Vec<String>>,
    }

    impl Host for RecordingHost {
        fn status(&self, message: &str) {
            self.statuses.lock().unwrap().push(message.to_owned());
        }

        fn fatal(&self, message: &str) {
            self.fatals.lock().unwrap().push(message.to_owned());
        }
    }

    fn runner_with_host() -> (CommandRunner, Arc<RecordingHost>) {
        let host = Arc::new(RecordingHost::default());
        let runner = CommandRunner::new(Arc::new(DroppingDispatcher), host.clone());
        (runner, host)
    }

    #[test]
    fn test_empty_command_rejected() {
        let (runner, host) = runner_with_host();

        let result = runner.run(Request::new(Vec::<String>::new()), |_| {});

        assert!(matches!(result, Err(CmdBridgeError::EmptyCommand)));
        assert!(host.statuses.lock().unwrap().is_empty());
    }

    #[test]
    fn test_all_blank_command_rejected() {
        let (runner, host) = runner_with_host();

        let result = runner.run(Request::new(["", "  ", "\t"]), |_| {});

        assert!(matches!(result, Err(CmdBridgeError::EmptyCommand)));
        assert!(host.statuses.lock().unwrap().is_empty());
    }

    #[test]
    fn test_status_defaults_to_joined_command() {
        let (runner, host) = runner_with_host();

        runner.run(Request::new(["echo", "", "hello"]), |_| {}).unwrap();

        assert_eq!(*host.statuses.lock().unwrap(), vec!["echo hello"]);
    }

    #[test]
    fn test_silent_suppresses_status() {
        let (runner, host) = runner_with_host();

        runner
            .run(Request::new(["echo", "hello"]).silent(), |_| {})
            .unwrap();

        assert!(host.statuses.lock().unwrap().is_empty());
    }

    #[test]
    fn test_status_override() {
        let (runner, host) = runner_with_host();

        runner
            .run(
                Request::new(["echo", "hello"]).status_message("saying hello"),
                |_| {},
            )
            .unwrap();

        assert_eq!(*host.statuses.lock().unwrap(), vec!["saying hello"]);
    }
}
