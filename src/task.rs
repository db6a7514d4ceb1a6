//! Cancellable background task polled by the loading state.
//!
//! The progress model is deliberately a fixed-duration timer, not real
//! asset I/O: the loading screen simulates work. One worker thread wakes
//! every poll interval; the wake doubles as the cancellation check, since
//! dropping the task drops the cancellation sender and the worker's
//! `recv_timeout` returns `Disconnected` within one interval. Dropping
//! never blocks on the worker.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crossbeam_channel::{RecvTimeoutError, Sender, bounded};
use log::debug;

/// Simulated duration of the loading work.
pub const LOAD_DURATION: Duration = Duration::from_secs(3);

/// How long the worker sleeps between completion checks.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Never sent; the channel exists so dropping the sender wakes the worker.
enum Cancel {}

/// One unit of simulated background work.
///
/// The completion flag transitions false→true exactly once; after that the
/// worker has exited.
pub struct BackgroundTask {
    started_at: Instant,
    duration: Duration,
    finished: Arc<AtomicBool>,
    cancel_tx: Option<Sender<Cancel>>,
    worker: Option<JoinHandle<()>>,
}

impl BackgroundTask {
    /// Start the standard [`LOAD_DURATION`] task.
    pub fn execute() -> Self {
        Self::execute_for(LOAD_DURATION)
    }

    /// Start a task of an explicit duration (tests use short ones).
    pub fn execute_for(duration: Duration) -> Self {
        let started_at = Instant::now();
        let finished = Arc::new(AtomicBool::new(false));
        let (cancel_tx, cancel_rx) = bounded::<Cancel>(0);

        let worker_flag = Arc::clone(&finished);
        let worker = std::thread::spawn(move || {
            loop {
                match cancel_rx.recv_timeout(POLL_INTERVAL) {
                    // Sender dropped: cancellation. Exit without touching
                    // the completion flag.
                    Err(RecvTimeoutError::Disconnected) => {
                        debug!("background task cancelled");
                        break;
                    }
                    Err(RecvTimeoutError::Timeout) => {
                        if started_at.elapsed() >= duration {
                            worker_flag.store(true, Ordering::Release);
                            break;
                        }
                    }
                    Ok(never) => match never {},
                }
            }
        });

        BackgroundTask {
            started_at,
            duration,
            finished,
            cancel_tx: Some(cancel_tx),
            worker: Some(worker),
        }
    }

    /// Fraction of the work done, clamped to `[0, 1]`. Safe to call while
    /// the worker runs.
    pub fn completion(&self) -> f32 {
        let elapsed = self.started_at.elapsed().as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).min(1.0)
    }

    /// Whether the worker observed the duration elapse.
    pub fn finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }
}

impl Drop for BackgroundTask {
    fn drop(&mut self) {
        // Dropping the sender is the cancellation request; the worker sees
        // it within one poll interval. Detach rather than join so teardown
        // never waits on the worker.
        self.cancel_tx.take();
        self.worker.take();
    }
}
