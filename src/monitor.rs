//! Cooperative cancellation for catalog loads.
//!
//! Metadata loads run on a host-dispatched worker thread. The host threads a
//! monitor handle through the load call; load routines check it between
//! records and abort promptly when cancellation is requested.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{Error, Result};

/// Progress monitor handle threaded through load routines.
pub trait ProgressMonitor: Send + Sync {
    /// Whether cancellation has been requested.
    fn is_canceled(&self) -> bool;

    /// Abort with `Error::Canceled` if cancellation has been requested.
    fn check_canceled(&self) -> Result<()> {
        if self.is_canceled() {
            Err(Error::Canceled)
        } else {
            Ok(())
        }
    }
}

/// Monitor that never reports cancellation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMonitor;

impl ProgressMonitor for NullMonitor {
    fn is_canceled(&self) -> bool {
        false
    }
}

/// Shared-flag monitor. The host keeps a clone and flips it to cancel.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    canceled: Arc<AtomicBool>,
}

impl CancelFlag {
    /// Create a new, un-canceled flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of any load watching this flag.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Relaxed);
    }
}

impl ProgressMonitor for CancelFlag {
    fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_monitor_never_cancels() {
        let monitor = NullMonitor;
        assert!(!monitor.is_canceled());
        assert!(monitor.check_canceled().is_ok());
    }

    #[test]
    fn test_cancel_flag() {
        let flag = CancelFlag::new();
        let watcher = flag.clone();
        assert!(watcher.check_canceled().is_ok());

        flag.cancel();
        assert!(watcher.is_canceled());
        assert!(matches!(watcher.check_canceled(), Err(Error::Canceled)));
    }
}
