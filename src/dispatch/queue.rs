//! Channel-backed dispatcher for polling hosts.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

use super::{Dispatcher, Task};

/// Task queue for hosts whose controlling thread polls its main loop.
///
/// Background threads enqueue work through [`Dispatcher::schedule`]; the
/// controlling thread calls [`run_pending`](Self::run_pending) once per
/// loop iteration to execute everything queued since the last poll.
pub struct MainLoopQueue {
    tx: Sender<Task>,
    rx: Mutex<Receiver<Task>>,
}

impl MainLoopQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx: Mutex::new(rx),
        }
    }

    /// Execute every task queued so far on the calling thread.
    ///
    /// Returns the number of tasks executed. Tasks run in the order they
    /// were scheduled by any single thread; no order is guaranteed across
    /// threads.
    pub fn run_pending(&self) -> usize {
        let drained: Vec<Task> = {
            // A poisoned lock only means a previous task panicked mid-drain;
            // the channel itself is still sound.
            let rx = match self.rx.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            std::iter::from_fn(|| rx.try_recv().ok()).collect()
        };

        let count = drained.len();
        for task in drained {
            task();
        }
        count
    }
}

impl Default for MainLoopQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher for MainLoopQueue {
    fn schedule(&self, task: Task) {
        // A closed receiver means the host loop is gone; dropping the task
        // is the only sensible outcome.
        let _ = self.tx.send(task);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_empty_queue_runs_nothing() {
        let queue = MainLoopQueue::new();
        assert_eq!(queue.run_pending(), 0);
    }

    #[test]
    fn test_tasks_run_in_schedule_order() {
        let queue = MainLoopQueue::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let seen = Arc::clone(&seen);
            queue.schedule(Box::new(move || seen.lock().unwrap().push(i)));
        }

        assert_eq!(queue.run_pending(), 3);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_tasks_execute_on_draining_thread() {
        let queue = Arc::new(MainLoopQueue::new());
        let observed = Arc::new(Mutex::new(None));

        {
            let queue = Arc::clone(&queue);
            let observed = Arc::clone(&observed);
            thread::spawn(move || {
                queue.schedule(Box::new(move || {
                    *observed.lock().unwrap() = Some(thread::current().id());
                }));
            })
            .join()
            .unwrap();
        }

        queue.run_pending();
        assert_eq!(*observed.lock().unwrap(), Some(thread::current().id()));
    }

    #[test]
    fn test_run_pending_drains_only_queued() {
        let queue = MainLoopQueue::new();
        let counter = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&counter);
        queue.schedule(Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(queue.run_pending(), 0);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
