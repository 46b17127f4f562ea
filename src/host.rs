//! Host environment surface.
//!
//! The runner reports back to its embedding application through [`Host`]:
//! transient status text when a command is launched, and a fatal alert when
//! the target executable does not exist. Everything else flows through the
//! caller's completion handler.

use tracing::{error, info};

/// Notification surface provided by the embedding application.
pub trait Host: Send + Sync {
    /// Set transient status text. Fire-and-forget, called from the
    /// controlling thread when a command is dispatched.
    fn status(&self, message: &str);

    /// Display a fatal error message to the user.
    ///
    /// The runner schedules this onto the controlling thread; it is only
    /// used for the distinguished "tool not found" condition.
    fn fatal(&self, message: &str);
}

/// Host implementation that routes notifications to the `tracing` log.
///
/// Useful as a default for headless embedding and in examples; interactive
/// hosts supply their own implementation backed by a status line and an
/// alert dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHost;

impl Host for LogHost {
    fn status(&self, message: &str) {
        info!("{message}");
    }

    fn fatal(&self, message: &str) {
        error!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_host_does_not_panic() {
        let host = LogHost;
        host.status("running fab -l");
        host.fatal("tool not found: fab");
    }

    #[test]
    fn test_host_is_object_safe() {
        let host: &dyn Host = &LogHost;
        host.status("boxed status");
    }
}
