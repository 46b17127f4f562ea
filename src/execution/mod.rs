//! Asynchronous command execution.
//!
//! One background thread per invocation: spawn the subprocess, feed stdin,
//! wait for exit, decode the combined output, then hand the [`Completion`]
//! to the controlling thread through the injected dispatcher.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use cmd_bridge::{CommandRunner, LogHost, MainLoopQueue, Request};
//!
//! let queue = Arc::new(MainLoopQueue::new());
//! let runner = CommandRunner::new(queue.clone(), Arc::new(LogHost));
//!
//! runner.run(Request::new(["fab", "-l"]), |completion| {
//!     println!("{completion:?}");
//! }).unwrap();
//!
//! // later, inside the host's main loop:
//! queue.run_pending();
//! ```

mod request;
mod result;
mod runner;

pub use request::Request;
pub use result::Completion;
pub use runner::CommandRunner;
