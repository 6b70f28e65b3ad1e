//! One-shot readiness flag per collection
//!
//! Readers wait until the collection's bootstrap has finished. The flag
//! only ever moves from not-ready to ready.

use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

const MIN_LOG_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct ReadyGate {
    collection: &'static str,
    ready: watch::Sender<bool>,
    log_interval: Duration,
}

impl ReadyGate {
    pub fn new(collection: &'static str, log_interval: Duration) -> Self {
        let (ready, _) = watch::channel(false);
        Self {
            collection,
            ready,
            log_interval: log_interval.max(MIN_LOG_INTERVAL),
        }
    }

    pub fn is_ready(&self) -> bool {
        *self.ready.borrow()
    }

    /// Idempotent; later calls are no-ops
    pub fn mark_ready(&self) {
        let changed = self.ready.send_if_modified(|ready| {
            if *ready {
                false
            } else {
                *ready = true;
                true
            }
        });
        if changed {
            tracing::debug!(collection = self.collection, "collection ready");
        }
    }

    /// Block until ready, warning every log interval while waiting
    pub async fn wait(&self) {
        let mut rx = self.ready.subscribe();
        let mut waited = Duration::ZERO;
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            match tokio::time::timeout(self.log_interval, rx.changed()).await {
                Ok(Ok(())) => continue,
                // Sender lives as long as the gate
                Ok(Err(_)) => return,
                Err(_) => {
                    waited += self.log_interval;
                    tracing::warn!(
                        collection = self.collection,
                        waited = ?waited,
                        "waiting for collection bootstrap to complete"
                    );
                }
            }
        }
    }

    /// Like [`wait`](Self::wait) but gives up on cancellation; returns
    /// whether the gate opened
    pub async fn wait_cancellable(&self, cancel: &CancellationToken) -> bool {
        tokio::select! {
            _ = self.wait() => true,
            _ = cancel.cancelled() => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_waiters_released_on_ready() {
        let gate = Arc::new(ReadyGate::new("Roles", Duration::from_millis(100)));
        assert!(!gate.is_ready());

        let waiter = {
            let gate = gate.clone();
            tokio::spawn(async move { gate.wait().await })
        };
        tokio::task::yield_now().await;
        assert!(!waiter.is_finished());

        gate.mark_ready();
        waiter.await.unwrap();
        assert!(gate.is_ready());
    }

    #[tokio::test]
    async fn test_mark_ready_never_resets() {
        let gate = ReadyGate::new("Roles", Duration::from_secs(1));
        gate.mark_ready();
        gate.mark_ready();
        assert!(gate.is_ready());
        gate.wait().await;
    }

    #[tokio::test]
    async fn test_wait_cancellable() {
        let gate = ReadyGate::new("Roles", Duration::from_secs(1));
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert!(!gate.wait_cancellable(&cancel).await);

        gate.mark_ready();
        assert!(gate.wait_cancellable(&CancellationToken::new()).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_keeps_waiting_past_log_interval() {
        let gate = Arc::new(ReadyGate::new("Roles", Duration::from_millis(100)));
        let waiter = {
            let gate = gate.clone();
            tokio::spawn(async move { gate.wait().await })
        };
        tokio::time::sleep(Duration::from_millis(350)).await;
        assert!(!waiter.is_finished());
        gate.mark_ready();
        waiter.await.unwrap();
    }
}
