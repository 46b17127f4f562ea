//! Controlling-thread dispatch.
//!
//! Results must land on the host's single-threaded main loop, never on a
//! background thread. The runner therefore hands every completion to a
//! [`Dispatcher`] instead of invoking callbacks directly. Hosts with their
//! own deferred-call facility implement the trait over it; hosts that poll
//! can use [`MainLoopQueue`].

mod queue;

pub use queue::MainLoopQueue;

/// A deferred unit of work for the controlling thread.
pub type Task = Box<dyn FnOnce() + Send>;

/// Scheduler seam onto the controlling thread's event loop.
pub trait Dispatcher: Send + Sync {
    /// Queue `task` for later execution on the controlling thread.
    ///
    /// Must be callable from any thread and must never run `task` inline;
    /// the task executes when the controlling thread next services its
    /// loop.
    fn schedule(&self, task: Task);
}
