//! UiHandle - producer side of the UI context
//!
//! Cloneable handle for posting view work from any thread. Posting is
//! fire-and-forget and never blocks, which makes it safe to call from
//! parameter store callbacks running on real-time or control threads.

use tokio::sync::{mpsc, oneshot};
use tracing::warn;

use super::actor::UiCommand;
use crate::view::FilterView;

/// Handle for posting work onto the UI context
#[derive(Clone)]
pub struct UiHandle {
    cmd_tx: mpsc::UnboundedSender<UiCommand>,
}

impl UiHandle {
    /// Wrap a command sender (used by [`super::UiActor::spawn`])
    pub fn new(cmd_tx: mpsc::UnboundedSender<UiCommand>) -> Self {
        Self { cmd_tx }
    }

    /// Post a closure to run against the view on the UI context
    ///
    /// Fire-and-forget: returns immediately, the closure runs asynchronously
    /// in post order. Posts after shutdown are dropped with a warning.
    pub fn post(&self, task: impl FnOnce(&mut dyn FilterView) + Send + 'static) {
        if self
            .cmd_tx
            .send(UiCommand::Run(Box::new(task)))
            .is_err()
        {
            warn!("ui context is gone, dropping posted task");
        }
    }

    /// Wait until everything posted before this call has executed
    ///
    /// Used for orderly shutdown and by tests to await quiescence.
    pub async fn flush(&self) {
        let (response_tx, response_rx) = oneshot::channel();
        if self
            .cmd_tx
            .send(UiCommand::Flush {
                response: response_tx,
            })
            .is_err()
        {
            return;
        }
        let _ = response_rx.await;
    }

    /// Check if the actor is still running
    pub fn is_alive(&self) -> bool {
        !self.cmd_tx.is_closed()
    }

    /// Signal the actor to stop after the commands already queued
    pub fn shutdown(&self) {
        let _ = self.cmd_tx.send(UiCommand::Shutdown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<UiHandle>();
    }

    #[tokio::test]
    async fn test_is_alive_when_channel_open() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let handle = UiHandle::new(tx);
        assert!(handle.is_alive());
    }

    #[tokio::test]
    async fn test_is_alive_when_channel_closed() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let handle = UiHandle::new(tx);
        assert!(!handle.is_alive());
        // Posting after close must not panic.
        handle.post(|_view| {});
        handle.flush().await;
    }
}
