//! Background transit scan handle.

use crate::error::{ChartError, Result};
use crate::transits::types::TransitEvent;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// A transit scan running on the blocking pool.
///
/// The scan delivers its whole event list or one error; nothing partial is
/// ever observable through the handle.
pub struct TransitJob {
    handle: JoinHandle<Result<Vec<TransitEvent>>>,
    cancel: Arc<AtomicBool>,
}

impl TransitJob {
    /// Run `scan` on `spawn_blocking`. The closure receives the shared cancel flag.
    pub fn spawn<F>(scan: F) -> Self
    where
        F: FnOnce(Arc<AtomicBool>) -> Result<Vec<TransitEvent>> + Send + 'static,
    {
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);
        let handle = tokio::task::spawn_blocking(move || scan(flag));
        Self { handle, cancel }
    }

    /// Ask the scan to stop at its next step.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the scan to complete.
    pub async fn join(self) -> Result<Vec<TransitEvent>> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(ChartError::ScanCancelled),
            Err(e) => Err(ChartError::ScanAborted(e.to_string())),
        }
    }
}
