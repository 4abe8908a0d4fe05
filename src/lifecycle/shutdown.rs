//! Shutdown coordination for the relay.
//!
//! `startup::run` owns one `Shutdown`, hands a receiver to
//! `HttpServer::run` and fires it from the signal task. In-flight
//! submissions finish their downstream call before the server returns.

use tokio::sync::broadcast;

/// One-shot stop signal for relay servers.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A receiver for one server. Subscribe before triggering; a signal
    /// sent earlier is not replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscribed server to stop accepting submissions.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
