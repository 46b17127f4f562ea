//! # cmd-bridge
//!
//! Asynchronous command execution for single-threaded interactive hosts.
//!
//! An interactive application (an editor plugin, a TUI, any cooperative
//! main loop) often needs to shell out to an external tool without
//! freezing its loop. `cmd-bridge` runs each invocation on a dedicated
//! background thread, captures the combined stdout+stderr, decodes it with
//! an optional fallback encoding, and schedules the result back onto the
//! controlling thread through an injected [`Dispatcher`].
//!
//! ## Features
//!
//! - **Thread-per-call execution**: one isolated background unit per
//!   invocation, no pooling, no shared state between units
//! - **Robust decoding**: UTF-8 first, caller-supplied fallback encoding
//!   second, lossy replacement as the last resort
//! - **Controlling-thread delivery**: completion handlers always run on
//!   the host's main loop, never on a background thread
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use cmd_bridge::{CommandRunner, LogHost, MainLoopQueue, Request};
//!
//! fn main() -> cmd_bridge::Result<()> {
//!     // Initialize logging
//!     cmd_bridge::logging::try_init().ok();
//!
//!     let queue = Arc::new(MainLoopQueue::new());
//!     let runner = CommandRunner::new(queue.clone(), Arc::new(LogHost));
//!
//!     runner.run(Request::new(["fab", "-l"]), |completion| {
//!         if let Some(text) = completion.output() {
//!             println!("{text}");
//!         }
//!     })?;
//!
//!     // Inside the host's main loop:
//!     queue.run_pending();
//!
//!     Ok(())
//! }
//! ```

pub mod dispatch;
pub mod error;
pub mod execution;
pub mod host;
pub mod logging;
pub mod output;

// Re-export commonly used types
pub use dispatch::{Dispatcher, MainLoopQueue, Task};
pub use error::{CmdBridgeError, Result};
pub use execution::{CommandRunner, Completion, Request};
pub use host::{Host, LogHost};
