//! Tokio driver for a [`Scheduler`].
//!
//! DESIGN
//! ======
//! One task owns the scheduler and the surface, so no locking is needed.
//! Payloads arrive over an unbounded channel (arrivals may outpace the
//! animation; the queue simply grows). The task `select!`s between the next
//! arrival and the next planned step, so arrivals mid-animation are queued
//! immediately while the session keeps its own pace.
//!
//! LIFECYCLE
//! =========
//! When every [`SchedulerHandle`] is dropped the task stops accepting input,
//! finishes the active session and everything still queued, then returns
//! the scheduler and surface to whoever awaits the join handle.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::scheduler::Scheduler;
use crate::surface::Surface;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("notebook driver has stopped")]
    Closed,
}

/// Cloneable input side of a running driver.
#[derive(Clone, Debug)]
pub struct SchedulerHandle {
    tx: mpsc::UnboundedSender<String>,
}

impl SchedulerHandle {
    /// Queue a payload (one or more newline-separated names).
    ///
    /// # Errors
    ///
    /// Returns [`DriverError::Closed`] if the driver task has exited.
    pub fn push(&self, payload: impl Into<String>) -> Result<(), DriverError> {
        self.tx.send(payload.into()).map_err(|_| DriverError::Closed)
    }
}

/// Spawn the driver task on the current tokio runtime.
pub fn spawn<S>(scheduler: Scheduler, surface: S) -> (SchedulerHandle, JoinHandle<(Scheduler, S)>)
where
    S: Surface + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(run(scheduler, surface, rx));
    (SchedulerHandle { tx }, task)
}

async fn run<S: Surface>(
    mut scheduler: Scheduler,
    mut surface: S,
    mut rx: mpsc::UnboundedReceiver<String>,
) -> (Scheduler, S) {
    let mut accepting = true;
    info!("notebook: driver started");

    loop {
        scheduler.advance(std::time::Instant::now(), &mut surface);
        let deadline = scheduler.next_deadline();
        if !accepting && deadline.is_none() {
            break;
        }

        let wake = deadline.map_or_else(tokio::time::Instant::now, tokio::time::Instant::from_std);
        tokio::select! {
            payload = rx.recv(), if accepting => match payload {
                Some(payload) => {
                    let added = scheduler.enqueue(&payload);
                    debug!(added, busy = scheduler.is_busy(), "notebook: payload received");
                }
                None => accepting = false,
            },
            () = tokio::time::sleep_until(wake), if deadline.is_some() => {}
        }
    }

    let stats = scheduler.stats();
    info!(started = stats.started, completed = stats.completed, aborted = stats.aborted, "notebook: driver stopped");
    (scheduler, surface)
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;
