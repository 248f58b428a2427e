// Signal handling module
//
// Supported signals:
// - SIGINT:  Stop the server (Ctrl+C)
// - SIGTERM: Stop the server
//
// Either one makes the accept loop return; main then prints the shutdown
// line and exits 0. In-flight responses are abandoned.

use std::sync::Arc;
use tokio::sync::Notify;

/// Shutdown coordination between the signal task and the accept loop
pub struct SignalHandler {
    /// Notified once when a stop signal arrives
    pub shutdown: Arc<Notify>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
        }
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the signal listener task (Unix)
#[cfg(unix)]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }

        handler.shutdown.notify_waiters();
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            handler.shutdown.notify_waiters();
        }
    });
}
