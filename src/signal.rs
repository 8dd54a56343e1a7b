// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Shutdown signal state
pub struct ShutdownSignal {
    pub notify: Arc<Notify>,
    /// Set before notifying, so a loop that missed the notification
    /// can still observe the request
    requested: Arc<AtomicBool>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self {
            notify: Arc::new(Notify::new()),
            requested: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the shutdown signal listener (Unix: SIGTERM and SIGINT)
#[cfg(unix)]
pub fn spawn_listener(shutdown: &ShutdownSignal) {
    use tokio::signal::unix::{signal, SignalKind};

    let notify = Arc::clone(&shutdown.notify);
    let requested = Arc::clone(&shutdown.requested);

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }

        requested.store(true, Ordering::SeqCst);
        notify.notify_waiters();
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn spawn_listener(shutdown: &ShutdownSignal) {
    let notify = Arc::clone(&shutdown.notify);
    let requested = Arc::clone(&shutdown.requested);

    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            requested.store(true, Ordering::SeqCst);
            notify.notify_waiters();
        }
    });
}
