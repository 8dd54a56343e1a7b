// Browser launch module
// Fire-and-forget: opens the GUI page once the server is up

use std::net::SocketAddr;
use std::time::Duration;

use crate::logger;

/// Open the default browser at the server root after a short delay.
///
/// Runs as a detached task; failure never affects the server.
pub fn spawn_open(addr: SocketAddr) {
    tokio::spawn(async move {
        // Give the listener a moment before pointing a browser at it
        tokio::time::sleep(Duration::from_secs(1)).await;

        let url = format!("http://{addr}");
        if let Err(e) = open::that(&url) {
            logger::log_warning(&format!(
                "Failed to open browser: {e}. Please navigate to {url} manually."
            ));
        }
    });
}
