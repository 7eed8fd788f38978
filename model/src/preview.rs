//! Runs the expected best success rate in the background, so a caller can keep reacting to pool
//! changes and simply drop the handle of an outdated computation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};

use crate::budget::RerollBudget;
use crate::die::{DieCatalog, DieInstance};
use crate::error::{ModelError, ModelResult};
use crate::expectation::expected_best_success_rate_until;
use crate::rate::SuccessRate;
use crate::threshold::PowerCheck;

type WorkerResult = ModelResult<Option<SuccessRate>>;

/// Starts computing [expected_best_success_rate](crate::expectation::expected_best_success_rate)
/// for a snapshot of the pool on the rayon thread pool.
pub fn spawn_expected_best(
    catalog: Arc<DieCatalog>,
    check: PowerCheck,
    budget: RerollBudget,
    dice: Vec<DieInstance>,
) -> PendingExpectation {
    let (sender, receiver) = mpsc::channel();
    let cancelled = Arc::new(AtomicBool::new(false));
    let worker_cancelled = Arc::clone(&cancelled);

    rayon::spawn(move || {
        let result =
            expected_best_success_rate_until(&catalog, &check, budget, &dice, &worker_cancelled);

        // the handle may already be gone, in which case nobody is interested anymore
        let _ = sender.send(result);
    });

    PendingExpectation {
        receiver,
        cancelled,
        result: None,
    }
}

/// Handle to a computation started by [spawn_expected_best]. Dropping it cancels the computation.
pub struct PendingExpectation {
    receiver: Receiver<WorkerResult>,
    cancelled: Arc<AtomicBool>,
    result: Option<ModelResult<SuccessRate>>,
}

impl PendingExpectation {

    /// Returns the result if the computation has finished, without blocking.
    pub fn try_result(&mut self) -> Option<ModelResult<SuccessRate>> {
        if self.result.is_none() {
            self.result = match self.receiver.try_recv() {
                Ok(result) => Some(finish(result)),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(Err(ModelError::WorkerLost)),
            };
        }

        self.result.clone()
    }

    /// Blocks until the computation has finished.
    pub fn wait(mut self) -> ModelResult<SuccessRate> {
        if let Some(result) = self.result.take() {
            return result;
        }

        match self.receiver.recv() {
            Ok(result) => finish(result),
            Err(_) => Err(ModelError::WorkerLost),
        }
    }

    /// Stops the computation at the next unique outcome.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for PendingExpectation {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

// Only the handle sets the flag, so a cancelled result never reaches a live handle.
fn finish(result: WorkerResult) -> ModelResult<SuccessRate> {
    result?.ok_or(ModelError::WorkerLost)
}
