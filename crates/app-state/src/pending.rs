//! Handle for an in-flight recipe lookup

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A recipe lookup that has been started but not yet applied
///
/// When dropped, the lookup is cancelled. Use [`PendingLoad::detach`] to
/// let it run to completion instead.
#[derive(Debug)]
pub struct PendingLoad {
    generation: u64,
    stop_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl PendingLoad {
    pub(crate) fn new(generation: u64, stop_tx: oneshot::Sender<()>, handle: JoinHandle<()>) -> Self {
        Self {
            generation,
            stop_tx: Some(stop_tx),
            handle,
        }
    }

    /// Submission counter value this lookup was started with
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the lookup task has exited
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stop the lookup; its result will never be applied
    pub fn cancel(mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }

    /// Release the handle and let the lookup finish on its own
    pub fn detach(mut self) {
        // Dropping the sender without sending leaves the stop branch disabled
        self.stop_tx.take();
    }
}

impl Drop for PendingLoad {
    fn drop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }
}
