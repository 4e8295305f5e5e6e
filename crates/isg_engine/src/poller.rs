use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use isg_core::Snapshot;
use isg_logging::{isg_debug, isg_error, isg_warn};
use tokio_util::sync::CancellationToken;

use crate::{ClientError, ErrorClass, IsgClient};

#[derive(Debug, Clone, PartialEq)]
pub enum PollEvent {
    Updated(Snapshot),
    Failed { failure: PollFailure, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollFailure {
    /// The device refused access; polling again will not help until the
    /// user intervenes.
    ReauthRequired,
    /// This cycle failed; the next one may succeed.
    Transient,
}

impl PollFailure {
    pub fn from_error(err: &ClientError) -> Self {
        match err.class() {
            ErrorClass::Authentication => PollFailure::ReauthRequired,
            ErrorClass::Communication | ErrorClass::Scraping => PollFailure::Transient,
        }
    }
}

/// Runs `fetch_all` on a background thread, once immediately and then after
/// every `interval`. Polls never overlap.
///
/// Dropping the poller cancels any in-flight poll and joins the thread.
pub struct Poller {
    cancel: CancellationToken,
    event_rx: mpsc::Receiver<PollEvent>,
    worker: Option<JoinHandle<()>>,
}

impl Poller {
    pub fn spawn(client: IsgClient, interval: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let worker = thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    isg_error!("Failed to start poller runtime: {}", err);
                    return;
                }
            };
            runtime.block_on(poll_loop(client, interval, token, event_tx));
        });

        Self {
            cancel,
            event_rx,
            worker: Some(worker),
        }
    }

    /// Blocks until the next event. `None` once the worker has stopped.
    pub fn recv(&self) -> Option<PollEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<PollEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<PollEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Cancels polling and waits for the background thread to finish.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.cancel.cancel();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

async fn poll_loop(
    client: IsgClient,
    interval: Duration,
    token: CancellationToken,
    event_tx: mpsc::Sender<PollEvent>,
) {
    loop {
        let result = tokio::select! {
            _ = token.cancelled() => break,
            result = client.fetch_all() => result,
        };

        let event = match result {
            Ok(snapshot) => PollEvent::Updated(snapshot),
            Err(err) => {
                let failure = PollFailure::from_error(&err);
                isg_warn!("Poll of {} failed ({:?}): {}", client.host(), failure, err);
                PollEvent::Failed {
                    failure,
                    message: err.to_string(),
                }
            }
        };
        if event_tx.send(event).is_err() {
            break;
        }

        tokio::select! {
            _ = token.cancelled() => break,
            _ = tokio::time::sleep(interval) => {}
        }
    }
    isg_debug!("Poller for {} stopped", client.host());
}
